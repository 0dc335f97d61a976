use pretty_assertions::assert_eq;

use crate::{AbstractionPattern, ForeignType, ForeignTypes, Idx, Pool};

#[test]
fn opaque_has_no_shape() {
    let pattern = AbstractionPattern::Opaque;
    assert!(pattern.is_opaque());
    assert_eq!(pattern.ty(), None);
    assert_eq!(pattern.foreign_type(), None);
}

#[test]
fn foreign_pattern_exposes_descriptor() {
    let mut foreign = ForeignTypes::new();
    let b = foreign.add(ForeignType::Bool);
    let pattern = AbstractionPattern::Foreign {
        ty: Idx::INT,
        foreign: b,
    };
    assert!(!pattern.is_opaque());
    assert_eq!(pattern.ty(), Some(Idx::INT));
    assert_eq!(pattern.foreign_type(), Some(b));
    assert_eq!(AbstractionPattern::Native(Idx::INT).foreign_type(), None);
}

#[test]
fn tuple_element_of_opaque_is_opaque() {
    let pool = Pool::new();
    let foreign = ForeignTypes::new();
    assert_eq!(
        AbstractionPattern::Opaque.tuple_element(&pool, &foreign, 0),
        AbstractionPattern::Opaque
    );
}

#[test]
fn tuple_element_of_native_tuple() {
    let pool = Pool::new();
    let foreign = ForeignTypes::new();
    let tuple = pool.tuple_unlabeled(&[Idx::INT, Idx::FLOAT]);
    let pattern = AbstractionPattern::Native(tuple);
    assert_eq!(
        pattern.tuple_element(&pool, &foreign, 1),
        AbstractionPattern::Native(Idx::FLOAT)
    );
    assert_eq!(
        pattern.tuple_element(&pool, &foreign, 2),
        AbstractionPattern::Opaque
    );
    assert_eq!(
        AbstractionPattern::Native(Idx::INT).tuple_element(&pool, &foreign, 0),
        AbstractionPattern::Opaque
    );
}

#[test]
fn tuple_element_of_foreign_array_shares_element_descriptor() {
    let pool = Pool::new();
    let mut foreign = ForeignTypes::new();
    let b = foreign.add(ForeignType::Bool);
    let arr = foreign.add(ForeignType::ConstantArray { element: b, len: 2 });
    let tuple = pool.tuple_unlabeled(&[Idx::INT, Idx::INT]);
    let pattern = AbstractionPattern::Foreign {
        ty: tuple,
        foreign: arr,
    };
    assert_eq!(
        pattern.tuple_element(&pool, &foreign, 1),
        AbstractionPattern::Foreign {
            ty: Idx::INT,
            foreign: b
        }
    );
}

#[test]
fn tuple_element_of_foreign_record_is_native() {
    let pool = Pool::new();
    let interner = abi_ir::StringInterner::new();
    let mut foreign = ForeignTypes::new();
    let rec = foreign.add(ForeignType::Record {
        name: interner.intern("point"),
    });
    let tuple = pool.tuple_unlabeled(&[Idx::FLOAT, Idx::FLOAT]);
    let pattern = AbstractionPattern::Foreign {
        ty: tuple,
        foreign: rec,
    };
    assert_eq!(
        pattern.tuple_element(&pool, &foreign, 0),
        AbstractionPattern::Native(Idx::FLOAT)
    );
}

#[test]
fn tuple_element_of_foreign_params_is_positional() {
    let pool = Pool::new();
    let interner = abi_ir::StringInterner::new();
    let mut foreign = ForeignTypes::new();
    let b = foreign.add(ForeignType::Bool);
    let string = foreign.add(ForeignType::ObjectPointer {
        class: Some(interner.intern("NSString")),
    });
    let params = foreign.add(ForeignType::Params {
        elements: vec![b, string],
    });
    let tuple = pool.tuple_unlabeled(&[Idx::INT, Idx::FLOAT]);
    let pattern = AbstractionPattern::Foreign {
        ty: tuple,
        foreign: params,
    };
    assert_eq!(
        pattern.tuple_element(&pool, &foreign, 0),
        AbstractionPattern::Foreign {
            ty: Idx::INT,
            foreign: b
        }
    );
    assert_eq!(
        pattern.tuple_element(&pool, &foreign, 1),
        AbstractionPattern::Foreign {
            ty: Idx::FLOAT,
            foreign: string
        }
    );
}
