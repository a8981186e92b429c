use javagen::JavaCodeFragment;

#[test]
fn deeply_nested_arguments_are_split_at_depth_zero_only() {
    let mut fragment = JavaCodeFragment::new();
    fragment
        .append_class_name(
            "java.util.Map<java.util.Map<java.lang.String, java.lang.Long>, \
             java.util.List<java.util.Set<java.lang.Integer>>>",
        )
        .expect("triple nesting");

    assert_eq!(fragment.source(), "Map<Map<String, Long>, List<Set<Integer>>>");
    assert_eq!(
        fragment.import_declaration().imports(),
        [
            "java.util.Map",
            "java.lang.String",
            "java.lang.Long",
            "java.util.List",
            "java.util.Set",
            "java.lang.Integer",
        ]
    );
}

#[test]
fn type_variables_stay_bare_inside_generics() {
    let mut fragment = JavaCodeFragment::new();
    fragment
        .append_class_name("java.util.Map<K, java.util.List<V>>")
        .expect("type variables");

    assert_eq!(fragment.source(), "Map<K, List<V>>");
    assert_eq!(
        fragment.import_declaration().imports(),
        ["java.util.Map", "java.util.List"]
    );
}

#[test]
fn wildcard_bounds_are_resolved_recursively() {
    let mut fragment = JavaCodeFragment::new();
    fragment
        .append_class_name(
            "java.util.Map<? extends java.lang.Number, ? super java.util.List<?>>",
        )
        .expect("wildcard bounds");

    assert_eq!(fragment.source(), "Map<? extends Number, ? super List<?>>");
    assert_eq!(
        fragment.import_declaration().imports(),
        ["java.util.Map", "java.lang.Number", "java.util.List"]
    );
}

#[test]
fn whitespace_around_arguments_is_normalized() {
    let mut fragment = JavaCodeFragment::new();
    fragment
        .append_class_name("java.util.Map< java.lang.String ,java.lang.Integer >")
        .expect("sloppy spacing");

    assert_eq!(fragment.source(), "Map<String, Integer>");
}

#[test]
fn collision_inside_generics_depends_on_earlier_appends() {
    // first fragment sees model.Money first, runtime.Money second
    let mut forward = JavaCodeFragment::new();
    forward
        .append_class_name("java.util.List<org.acme.model.Money>")
        .expect("model Money");
    forward.append(" ");
    forward
        .append_class_name("java.util.List<org.acme.runtime.Money>")
        .expect("runtime Money");

    assert_eq!(forward.source(), "List<Money> List<org.acme.runtime.Money>");

    // reversing the order flips which Money wins the short form
    let mut reversed = JavaCodeFragment::new();
    reversed
        .append_class_name("java.util.List<org.acme.runtime.Money>")
        .expect("runtime Money");
    reversed.append(" ");
    reversed
        .append_class_name("java.util.List<org.acme.model.Money>")
        .expect("model Money");

    assert_eq!(reversed.source(), "List<Money> List<org.acme.model.Money>");
}

#[test]
fn generic_array_suffix_applies_after_type_arguments() {
    let mut fragment = JavaCodeFragment::new();
    fragment
        .append_class_name("java.util.List<java.lang.String>[]")
        .expect("generic array");

    assert_eq!(fragment.source(), "List<String>[]");
    assert_eq!(
        fragment.import_declaration().imports(),
        ["java.util.List", "java.lang.String"]
    );
}
