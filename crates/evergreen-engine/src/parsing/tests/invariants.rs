use crate::element::Element;

/// Structural invariants every parsed tree must satisfy.
pub fn check(elements: &[Element]) {
    for element in elements {
        check_element(element);
    }
}

fn check_element(el: &Element) {
    assert!(
        el.classes.iter().all(|c| !c.is_empty()),
        "empty class on {}",
        el.element
    );

    for child in &el.children {
        if let Some(identifier) = &child.identifier {
            assert_eq!(
                el.text.matches(identifier.as_str()).count(),
                1,
                "{} token must appear once in parent {} text {:?}",
                child.element,
                el.element,
                el.text
            );
        }
        check_element(child);
    }
}
