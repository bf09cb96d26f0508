use pipette_core::compose::compose;
use pipette_core::config::TraceConfig;
use pipette_core::pipe::Pipe;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helper steps for property-based tests
// ---------------------------------------------------------------------------

fn add_n(n: i32) -> impl Fn(i32) -> i32 {
    move |x| x.wrapping_add(n)
}

fn mul_n(n: i32) -> impl Fn(i32) -> i32 {
    move |x| x.wrapping_mul(n)
}

// ---------------------------------------------------------------------------
// Property-based tests
// ---------------------------------------------------------------------------

proptest! {
    // 1. Identity: Pipe::new(v).value() == v
    #[test]
    fn identity_law(v in any::<i64>(), s in "[a-zA-Z0-9 ]{0,30}") {
        prop_assert_eq!(*Pipe::new(v).value(), v);
        prop_assert_eq!(Pipe::new(s.clone()).into_inner(), s);
    }

    // 2. Single step: Pipe::new(v).then(f).value() == f(v)
    #[test]
    fn single_step_law(x in any::<i32>(), n in -100i32..100) {
        let f = add_n(n);
        prop_assert_eq!(Pipe::new(x).then(&f).into_inner(), f(x));
    }

    // 3. Chaining: Pipe::new(v).then(f).then(g).value() == g(f(v))
    #[test]
    fn chaining_law(x in any::<i32>(), a in -100i32..100, b in -100i32..100) {
        let f = add_n(a);
        let g = mul_n(b);
        prop_assert_eq!(Pipe::new(x).then(&f).then(&g).into_inner(), g(f(x)));
    }

    // 3b. Grouping steps does not matter:
    //     (f then g) then h ≡ f then (g then h)
    #[test]
    fn chaining_associativity(x in any::<i32>(), a in -100i32..100, b in -100i32..100, c in -100i32..100) {
        let (f, g, h) = (add_n(a), mul_n(b), add_n(c));

        let left = Pipe::new(x).then(&f).then(&g).then(&h).into_inner();
        let right = Pipe::new(x)
            .then(|v| Pipe::new(f(v)).then(&g).then(&h).into_inner())
            .into_inner();

        prop_assert_eq!(left, right, "Associativity violated for x={}, a={}, b={}, c={}", x, a, b, c);
    }

    // 4. compose preserves order and length
    #[test]
    fn compose_preserves_order(values in prop::collection::vec(any::<i32>(), 0..50), n in -100i32..100) {
        let f = mul_n(n);
        let mapped = compose(&f)(values.clone()).into_inner();

        prop_assert_eq!(mapped.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(mapped[i], f(*v), "element {} differs", i);
        }
    }

    // 5. No mutation: a clone taken before `then` keeps its value
    #[test]
    fn then_does_not_mutate(values in prop::collection::vec(any::<u8>(), 0..20)) {
        let original = Pipe::new(values.clone());
        let _reversed = original.clone().then(|mut v: Vec<u8>| {
            v.reverse();
            v
        });
        prop_assert_eq!(original.value(), &values);

        let _len = original.then_ref(|v| v.len());
        prop_assert_eq!(original.into_inner(), values);
    }

    // 6. `|` and `then` agree
    #[test]
    fn bitor_equals_then(x in any::<i32>(), a in -100i32..100, b in -100i32..100) {
        let via_operator = Pipe::new(x) | add_n(a) | mul_n(b);
        let via_method = Pipe::new(x).then(add_n(a)).then(mul_n(b));
        prop_assert_eq!(via_operator, via_method);
    }

    // 7. A traced chain yields the same value and counts every step
    #[test]
    fn traced_equals_plain(x in any::<i32>(), steps in prop::collection::vec(-100i32..100, 0..10)) {
        let mut plain = Pipe::new(x);
        let mut traced = Pipe::new(x).traced(TraceConfig::default());
        for n in &steps {
            plain = plain.then(add_n(*n));
            traced = traced.then(add_n(*n));
        }
        prop_assert_eq!(traced.steps(), steps.len());
        prop_assert_eq!(traced.into_inner(), plain.into_inner());
    }

    // 8. try_then surfaces exactly the error the step returned
    #[test]
    fn try_then_error_passthrough(x in any::<i32>(), msg in "[a-z]{1,20}") {
        let expected = msg.clone();
        let result = Pipe::new(x).try_then(move |_v: i32| Err::<i32, String>(msg));
        prop_assert_eq!(result.unwrap_err(), expected);
    }
}
