use web_sys::{DomRect, Element, HtmlElement, WheelEvent};

use hamekomi_core::SpinDirection;

pub(crate) trait HasClientRect {
    fn client_rect(&self) -> DomRect;
}

impl HasClientRect for Element {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

impl HasClientRect for HtmlElement {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

pub(crate) fn screen_to_container_coords(
    screen_x: f32,
    screen_y: f32,
    container: &impl HasClientRect,
) -> Option<(f32, f32)> {
    let rect = container.client_rect();
    let rect_width = rect.width() as f32;
    let rect_height = rect.height() as f32;
    if rect_width <= 0.0 || rect_height <= 0.0 {
        return None;
    }
    Some((
        screen_x - rect.left() as f32,
        screen_y - rect.top() as f32,
    ))
}

pub(crate) fn spin_direction_for_delta(delta_y: f64) -> SpinDirection {
    if delta_y > 0.0 {
        SpinDirection::Clockwise
    } else {
        SpinDirection::CounterClockwise
    }
}

pub(crate) fn wheel_spin_direction(event: &WheelEvent) -> SpinDirection {
    spin_direction_for_delta(event.delta_y())
}

pub(crate) fn parse_rotation_attr(value: Option<String>, fallback: f32) -> f32 {
    value
        .and_then(|raw| raw.trim().parse::<f32>().ok())
        .unwrap_or(fallback)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    struct FixedRect(DomRect);

    impl HasClientRect for FixedRect {
        fn client_rect(&self) -> DomRect {
            self.0.clone()
        }
    }

    fn rect(x: f64, y: f64, width: f64, height: f64) -> FixedRect {
        FixedRect(
            DomRect::new_with_x_and_y_and_width_and_height(x, y, width, height)
                .expect("dom rect"),
        )
    }

    #[wasm_bindgen_test]
    fn pointer_maps_into_container_space() {
        let container = rect(40.0, 60.0, 640.0, 420.0);
        assert_eq!(
            screen_to_container_coords(140.0, 160.0, &container),
            Some((100.0, 100.0))
        );
    }

    #[wasm_bindgen_test]
    fn collapsed_container_yields_no_coords() {
        let container = rect(40.0, 60.0, 0.0, 420.0);
        assert_eq!(screen_to_container_coords(140.0, 160.0, &container), None);
    }

    #[wasm_bindgen_test]
    fn wheel_delta_sign_picks_the_spin() {
        assert_eq!(spin_direction_for_delta(3.0), SpinDirection::Clockwise);
        assert_eq!(
            spin_direction_for_delta(-3.0),
            SpinDirection::CounterClockwise
        );
        assert_eq!(
            spin_direction_for_delta(0.0),
            SpinDirection::CounterClockwise
        );
    }

    #[wasm_bindgen_test]
    fn rotation_attr_falls_back_when_unparsable() {
        assert_eq!(parse_rotation_attr(Some(" 25 ".to_string()), 0.0), 25.0);
        assert_eq!(parse_rotation_attr(Some("-30".to_string()), 0.0), -30.0);
        assert_eq!(parse_rotation_attr(Some("north".to_string()), 5.0), 5.0);
        assert_eq!(parse_rotation_attr(None, 5.0), 5.0);
    }
}
