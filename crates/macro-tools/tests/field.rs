use convexa_macro_tools::{Builder, Deref, Fields};

#[test]
fn test_common_read_field() {
    #[derive(Fields)]
    #[r]
    struct Meta {
        field_a: String,
        field_b: usize,
    }

    let meta = Meta {
        field_a: String::from("a"),
        field_b: 3,
    };

    let field_a: &String = meta.field_a();
    let field_b: usize = meta.field_b();
    assert_eq!(field_a, "a");
    assert_eq!(field_b, 3);
}

#[test]
fn test_read_copy_field() {
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Pair(f64, f64);

    #[derive(Fields)]
    #[r]
    struct Meta {
        #[r(copy)]
        pair: Pair,
        name: String,
    }

    let meta = Meta {
        pair: Pair(1., 2.),
        name: String::new(),
    };

    let pair: Pair = meta.pair();
    assert_eq!(pair, Pair(1., 2.));
    assert!(meta.name().is_empty());
}

#[test]
fn test_common_write_field() {
    #[derive(Fields)]
    #[w]
    struct Meta {
        field_a: String,
        field_b: i32,
    }

    let mut meta = Meta {
        field_a: String::new(),
        field_b: 3,
    };

    meta.field_a_mut().push('x');
    *meta.field_b_mut() += 1;
    assert_eq!(meta.field_a, "x");
    assert_eq!(meta.field_b, 4);
}

#[test]
fn test_custom_write_field_reducer() {
    #[derive(Fields)]
    #[r]
    struct Meta {
        #[w(reducer)]
        field_a: String,
        field_b: i32,
    }

    let mut meta = Meta {
        field_a: String::from("n"),
        field_b: 3,
    };

    let field_b = meta.field_b();
    meta.set_field_a(|field_a| field_a + &field_b.to_string());
    assert_eq!(meta.field_a(), "n3");
}

#[test]
fn test_custom_write_field_set() {
    #[derive(Fields)]
    #[r]
    struct Meta {
        #[w(set)]
        field_a: String,
    }

    let mut meta = Meta {
        field_a: String::new(),
    };

    meta.set_field_a("set");
    assert_eq!(meta.field_a(), "set");
}

#[test]
fn test_skip_field() {
    #[derive(Fields)]
    #[r]
    struct Meta {
        shown: i32,
        #[r(skip)]
        hidden: i32,
    }

    impl Meta {
        fn hidden(&self) -> i32 {
            self.hidden * 2
        }
    }

    let meta = Meta { shown: 1, hidden: 2 };
    assert_eq!(meta.shown(), 1);
    assert_eq!(meta.hidden(), 4);
}

#[test]
fn test_builder_defaults() {
    #[derive(Builder, Debug, PartialEq)]
    struct Limits {
        #[default = 100]
        iterations: usize,
        #[default = 0.5]
        tolerance: f64,
        label: String,
    }

    assert_eq!(
        Limits::default(),
        Limits {
            iterations: 100,
            tolerance: 0.5,
            label: String::new(),
        }
    );

    let limits: Limits = LimitsBuilder::new().iterations(7).label("tight").into();
    assert_eq!(limits.iterations, 7);
    assert_eq!(limits.tolerance, 0.5);
    assert_eq!(limits.label, "tight");
}

#[test]
fn test_deref_named_field() {
    #[derive(Deref, Default)]
    struct Steps {
        name: &'static str,
        #[deref]
        steps: Vec<u8>,
    }

    let mut steps = Steps::default();
    steps.push(1);
    steps.push(2);
    assert_eq!(steps.len(), 2);
    assert_eq!(steps.name, "");
}

#[test]
fn test_deref_newtype() {
    #[derive(Deref)]
    struct Stack(Vec<u8>);

    let mut stack = Stack(vec![1]);
    stack.push(3);
    assert_eq!(*stack, vec![1, 3]);
}

#[test]
fn test_deref_read_only_field() {
    #[derive(Deref)]
    struct Sum {
        parts: (u8, u8),
        #[deref(ref)]
        total: u8,
    }

    let sum = Sum {
        parts: (1, 2),
        total: 3,
    };
    assert_eq!(*sum, 3);
    assert_eq!(sum.parts.0 + sum.parts.1, *sum);
}
