use super::*;

#[test]
fn level_class_maps_success() {
    assert_eq!(level_class(ToastLevel::Success), "success");
}

#[test]
fn level_class_maps_error() {
    assert_eq!(level_class(ToastLevel::Error), "error");
}
