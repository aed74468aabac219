use super::*;

#[test]
fn each_kind_maps_to_its_own_class() {
    assert_eq!(toast_kind_class(ToastKind::Success), "toast--success");
    assert_eq!(toast_kind_class(ToastKind::Error), "toast--error");
    assert_eq!(toast_kind_class(ToastKind::Info), "toast--info");
}
