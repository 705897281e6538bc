use super::*;

#[test]
fn text_class_plain() {
    assert_eq!(text_class(false, None, None), "text");
}

#[test]
fn text_class_combines_modifiers() {
    assert_eq!(
        text_class(true, Some(31), Some(800)),
        "text text--uppercase text--size-31 text--weight-800"
    );
    assert_eq!(text_class(false, Some(12), None), "text text--size-12");
}
