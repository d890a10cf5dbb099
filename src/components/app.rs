use web_sys::HtmlSelectElement;
use yew::prelude::*;
use zxing_scanner::use_video_devices;

use super::Scanner;

const MAX_HISTORY: usize = 20;

#[function_component(App)]
pub fn app() -> Html {
    let devices = use_video_devices();
    let selected_device = use_state(|| None::<String>);
    let show_scanner = use_state(|| false);
    let history = use_state(Vec::<String>::new);

    let on_device_change = {
        let selected_device = selected_device.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            // "" = dejar que decidan las constraints por defecto
            selected_device.set((!value.is_empty()).then_some(value));
        })
    };

    let open_scanner = {
        let show_scanner = show_scanner.clone();
        Callback::from(move |_: MouseEvent| show_scanner.set(true))
    };

    let close_scanner = {
        let show_scanner = show_scanner.clone();
        Callback::from(move |_| show_scanner.set(false))
    };

    let on_barcode_detected = {
        let history = history.clone();
        Callback::from(move |code: String| {
            let mut codes = (*history).clone();
            if codes.first() != Some(&code) {
                codes.insert(0, code);
                codes.truncate(MAX_HISTORY);
                history.set(codes);
            }
        })
    };

    let refresh_devices = devices.refresh.reform(|_: MouseEvent| ());

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"ZXing Scanner"}</h1>
            </header>

            <section class="device-picker">
                <select onchange={on_device_change} disabled={*devices.loading}>
                    <option value="" selected={selected_device.is_none()}>{"Cámara trasera (por defecto)"}</option>
                    { for devices.devices.iter().enumerate().map(|(index, device)| {
                        let label = if device.label.is_empty() {
                            format!("Cámara {}", index + 1)
                        } else {
                            device.label.clone()
                        };
                        let selected = selected_device.as_deref() == Some(device.device_id.as_str());
                        html! {
                            <option value={device.device_id.clone()} selected={selected}>{label}</option>
                        }
                    }) }
                </select>
                <button onclick={refresh_devices}>{"↻"}</button>
                {
                    if let Some(error) = &*devices.error {
                        html! { <span class="error">{error}</span> }
                    } else {
                        html! {}
                    }
                }
            </section>

            <button class="btn-scan" onclick={open_scanner}>{"📷 Escanear"}</button>

            <ul class="scan-history">
                { for history.iter().map(|code| html! { <li>{code}</li> }) }
            </ul>

            {
                if *show_scanner {
                    html! {
                        <Scanner
                            device_id={(*selected_device).clone()}
                            on_close={close_scanner}
                            on_barcode_detected={on_barcode_detected}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
