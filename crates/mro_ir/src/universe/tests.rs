use super::*;

#[test]
fn new_registry_has_well_known_types() {
    let reg = ClassRegistry::new();
    assert_eq!(reg.len(), 3);
    assert_eq!(reg.lookup("Object"), Some(ClassId::OBJECT));
    assert_eq!(reg.lookup("Serializable"), Some(ClassId::SERIALIZABLE));
    assert_eq!(reg.lookup("Cloneable"), Some(ClassId::CLONEABLE));
    assert!(reg.is_interface(ClassId::SERIALIZABLE));
    assert!(!reg.is_interface(ClassId::OBJECT));
    assert_eq!(reg.superclass(ClassId::OBJECT), None);
}

#[test]
fn declared_class_extends_root_by_default() {
    let mut reg = ClassRegistry::new();
    let foo = reg.declare_class("Foo");
    assert_eq!(reg.superclass(foo), Some(ClassId::OBJECT));
    assert_eq!(reg.kind(foo), Some(ClassKind::Class));
}

#[test]
fn interfaces_ignore_superclass() {
    let mut reg = ClassRegistry::new();
    let iface = reg.declare_interface("Iface");
    let base = reg.declare_class("Base");
    reg.set_superclass(iface, Some(base));
    assert_eq!(reg.superclass(iface), None);
}

#[test]
fn forward_references_resolve_after_second_phase() {
    let mut reg = ClassRegistry::new();
    let set = reg.declare_interface("Set");
    let coll = reg.declare_interface("Collection");
    reg.set_interfaces(set, [coll]);
    assert_eq!(reg.interfaces(set), &[coll]);
    assert!(reg.interfaces(coll).is_empty());
}

#[test]
fn same_name_declarations_are_distinct() {
    let mut reg = ClassRegistry::new();
    let first = reg.declare_class("Node");
    let second = reg.declare_class("Node");
    assert_ne!(first, second);
    assert_eq!(reg.lookup("Node"), Some(first));
    assert_eq!(reg.lookup_all("Node"), &[first, second]);
    assert_eq!(reg.class_name(second), "Node");
}

#[test]
fn unknown_ids_are_harmless() {
    let reg = ClassRegistry::new();
    let missing = ClassId::from_raw(999);
    assert!(!reg.contains(missing));
    assert_eq!(reg.superclass(missing), None);
    assert!(reg.interfaces(missing).is_empty());
    assert_eq!(reg.class_name(missing), "<unknown>");
}

#[test]
fn user_ids_skip_well_known() {
    let mut reg = ClassRegistry::new();
    let a = reg.declare_class("A");
    let b = reg.declare_interface("B");
    assert_eq!(reg.user_ids().collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn arc_and_ref_forward_to_registry() {
    let mut reg = ClassRegistry::new();
    let a = reg.declare_class("A");
    let shared = Arc::new(reg);
    assert_eq!(TypeUniverse::class_name(&shared, a), "A");
    let by_ref: &ClassRegistry = &shared;
    assert_eq!(TypeUniverse::superclass(&by_ref, a), Some(ClassId::OBJECT));
}
