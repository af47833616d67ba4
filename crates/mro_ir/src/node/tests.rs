use super::*;

#[test]
fn zero_dimension_array_is_rejected() {
    assert_eq!(ArrayType::new(ElementType::Primitive(Primitive::Int), 0), None);
}

#[test]
fn lifting_by_zero_is_identity() {
    let int = ElementType::Primitive(Primitive::Int);
    assert_eq!(int.lifted(0), TypeNode::Primitive(Primitive::Int));
}

#[test]
fn array_of_composes_dimensions() {
    let node = TypeNode::Class(ClassId::OBJECT);
    let once = node.array_of(1);
    let twice = once.and_then(|n| n.array_of(1));
    assert_eq!(twice, node.array_of(2));

    let Some(TypeNode::Array(array)) = twice else {
        panic!("expected an array node, got {twice:?}");
    };
    assert_eq!(array.dims(), 2);
    assert_eq!(array.element(), ElementType::Class(ClassId::OBJECT));
}

#[test]
fn array_of_overflow_is_none() {
    let node = TypeNode::Primitive(Primitive::Byte).array_of(200);
    assert!(node.is_some());
    assert_eq!(node.and_then(|n| n.array_of(100)), None);
}

#[test]
fn lowering_strips_dimensions() {
    let element = ElementType::Class(ClassId::CLONEABLE);
    let three = element.lifted(3);
    assert_eq!(three.lowered(1), element.lifted(2));
    assert_eq!(three.lowered(3), TypeNode::Class(ClassId::CLONEABLE));
    assert_eq!(three.lowered(10), TypeNode::Class(ClassId::CLONEABLE));
}

#[test]
fn lowering_non_array_is_identity() {
    assert_eq!(TypeNode::ROOT.lowered(1), TypeNode::ROOT);
}

#[test]
fn primitive_nodes_are_value_equal() {
    assert_eq!(
        TypeNode::from(Primitive::Int),
        TypeNode::Primitive(Primitive::Int)
    );
}

#[test]
fn distinct_class_ids_are_distinct_nodes() {
    assert_ne!(
        TypeNode::from(ClassId::from_raw(10)),
        TypeNode::from(ClassId::from_raw(11))
    );
}

#[test]
fn as_element_rejects_arrays() {
    assert!(TypeNode::ROOT.as_element().is_some());
    assert!(TypeNode::ROOT.array_of(1).and_then(TypeNode::as_element).is_none());
}
