//! Array parent lifting, shared by every policy.
//!
//! An `n`-dimensional array of element `E` takes its parents from `E`:
//!
//! - If `E` has parents `[P1, .., Pk]`, the array's parents are
//!   `[P1[]^n, .., Pk[]^n]`.
//! - If `E` has none and is not an interface, the array's parents are the
//!   fixed leaves `[Serializable, Cloneable, Object]` lifted to `n - 1`
//!   dimensions. For a plain `E[]` that is the leaves themselves.
//! - Otherwise the array has no parents.

use mro_ir::{ArrayType, ElementType, TypeUniverse};

use crate::{Parents, Policy};

pub(crate) fn array_parents<U: TypeUniverse + ?Sized>(
    universe: &U,
    policy: Policy,
    array: ArrayType,
) -> Parents {
    let dims = array.dims();
    let element = array.element();
    let element_parents = policy.element_parents(universe, element);

    if !element_parents.is_empty() {
        return element_parents.into_iter().map(|p| p.lifted(dims)).collect();
    }

    let interface_like = match element {
        ElementType::Class(class) => universe.is_interface(class),
        ElementType::Primitive(_) => false,
    };
    if interface_like {
        return Parents::new();
    }

    [universe.serializable(), universe.cloneable(), universe.root()]
        .into_iter()
        .map(|leaf| ElementType::Class(leaf).lifted(dims - 1))
        .collect()
}
