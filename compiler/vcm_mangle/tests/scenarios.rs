//! End-to-end mangling scenarios.
//!
//! Each test builds a small module the way a resolver would and checks the
//! decisions the back end reads for every callable in it.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use vcm_ir::{
    CallableId, ClassFlags, DeclGraph, GraphBuilder, Primitive, StringInterner, TypeRef,
    Visibility,
};
use vcm_mangle::{ExemptionRegistry, ManglingDecision, ManglingEngine};

const INT: TypeRef = TypeRef::Primitive(Primitive::Int);
const MANGLE: ManglingDecision = ManglingDecision {
    mangle_name: true,
    suppress_constructor: false,
};
const MANGLE_AND_SUPPRESS: ManglingDecision = ManglingDecision {
    mangle_name: true,
    suppress_constructor: true,
};

/// Decisions keyed by callable name, in declaration order.
fn decisions(interner: &StringInterner, graph: &DeclGraph) -> Vec<(String, ManglingDecision)> {
    let exemptions = ExemptionRegistry::standard(interner);
    let engine = ManglingEngine::new(graph, &exemptions);
    engine
        .decide_all()
        .into_iter()
        .map(|(id, decision)| {
            let name = interner.lookup(graph.callable(id).unwrap().name).to_owned();
            (name, decision)
        })
        .collect()
}

fn named(list: &[(&str, ManglingDecision)]) -> Vec<(String, ManglingDecision)> {
    list.iter()
        .map(|(name, decision)| ((*name).to_owned(), *decision))
        .collect()
}

#[test]
fn units_module() {
    // value class Meters(Double)
    // class Distance(m: Meters)
    // fun f(x: Meters)
    // fun g(): Meters
    // fun <T : Meters> g2(): T
    // fun h(): Result<Int>
    // fun plain(x: Int): Int
    let interner = StringInterner::new();
    let mut builder = GraphBuilder::new(&interner);
    let any = builder.class("core.Any", ClassFlags::empty());
    let result = builder.class("core.Result", ClassFlags::VALUE);
    builder.class_type_param(result, "T", [TypeRef::class(any)]);
    let meters = builder.class("units.Meters", ClassFlags::VALUE);
    let distance = builder.class("units.Distance", ClassFlags::empty());

    let ctor = builder.constructor(distance, Visibility::Public);
    builder.value_param(ctor, "m", TypeRef::class(meters));

    let f = builder.function("f", Visibility::Public);
    builder.value_param(f, "x", TypeRef::class(meters));

    let g = builder.function("g", Visibility::Public);
    builder.returns(g, TypeRef::class(meters));

    let g2 = builder.function("g2", Visibility::Public);
    let g2_t = builder.callable_type_param(g2, "T", [TypeRef::class(meters)]);
    builder.returns(g2, TypeRef::param(g2_t));

    let h = builder.function("h", Visibility::Public);
    builder.returns(h, TypeRef::applied(result, vec![INT]));

    let plain = builder.function("plain", Visibility::Public);
    builder.value_param(plain, "x", INT);
    builder.returns(plain, INT);

    let graph = builder.finish().unwrap();
    assert_eq!(
        decisions(&interner, &graph),
        named(&[
            ("Distance", MANGLE_AND_SUPPRESS),
            ("f", MANGLE),
            ("g", MANGLE),
            ("g2", ManglingDecision::UNCHANGED),
            ("h", ManglingDecision::UNCHANGED),
            ("plain", ManglingDecision::UNCHANGED),
        ])
    );
}

#[test]
fn constructors_by_owner_and_visibility() {
    // value class Meters(Double)
    // value class Wrapped(m: Meters)       -- value-class owner
    // sealed class Shape(m: Meters)        -- sealed owner
    // class Box private constructor(m: Meters)
    // class Box protected constructor(m: Meters)
    let interner = StringInterner::new();
    let mut builder = GraphBuilder::new(&interner);
    let meters = builder.class("units.Meters", ClassFlags::VALUE);
    let wrapped = builder.class("units.Wrapped", ClassFlags::VALUE);
    let shape = builder.class("geo.Shape", ClassFlags::SEALED);
    let boxed = builder.class("app.Box", ClassFlags::empty());

    for (class, visibility) in [
        (wrapped, Visibility::Public),
        (shape, Visibility::Public),
        (boxed, Visibility::Private),
        (boxed, Visibility::Protected),
    ] {
        let ctor = builder.constructor(class, visibility);
        builder.value_param(ctor, "m", TypeRef::class(meters));
    }

    let graph = builder.finish().unwrap();
    assert_eq!(
        decisions(&interner, &graph),
        named(&[
            ("Wrapped", MANGLE),
            ("Shape", MANGLE),
            ("Box", MANGLE),
            ("Box", MANGLE_AND_SUPPRESS),
        ])
    );
}

#[test]
fn generic_functions_over_value_bounds() {
    // fun <T : Meters> p(x: T)
    // fun <T : S, S : T> q(x: T, y: S)
    // fun <T : Result<Int>> r(x: T)
    // fun <A : B, B : Meters> s(x: A)
    let interner = StringInterner::new();
    let mut builder = GraphBuilder::new(&interner);
    let result = builder.class("core.Result", ClassFlags::VALUE);
    let meters = builder.class("units.Meters", ClassFlags::VALUE);

    let p = builder.function("p", Visibility::Public);
    let pt = builder.callable_type_param(p, "T", [TypeRef::class(meters)]);
    builder.value_param(p, "x", TypeRef::param(pt));

    let q = builder.function("q", Visibility::Public);
    let qt = builder.callable_type_param(q, "T", [TypeRef::UNIT]);
    let qs = builder.callable_type_param(q, "S", [TypeRef::param(qt)]);
    builder.set_bounds(qt, [TypeRef::param(qs)]);
    builder.value_param(q, "x", TypeRef::param(qt));
    builder.value_param(q, "y", TypeRef::param(qs));

    let r = builder.function("r", Visibility::Public);
    let rt = builder.callable_type_param(r, "T", [TypeRef::applied(result, vec![INT])]);
    builder.value_param(r, "x", TypeRef::param(rt));

    let s = builder.function("s", Visibility::Public);
    let sb = builder.callable_type_param(s, "B", [TypeRef::class(meters)]);
    let sa = builder.callable_type_param(s, "A", [TypeRef::param(sb)]);
    builder.value_param(s, "x", TypeRef::param(sa));

    let graph = builder.finish().unwrap();
    assert_eq!(graph.representative_bound(sa), Some(&TypeRef::param(sb)));
    assert_eq!(graph.representative_bound(qt), Some(&TypeRef::param(qs)));
    assert_eq!(
        decisions(&interner, &graph),
        named(&[
            ("p", MANGLE),
            ("q", ManglingDecision::UNCHANGED),
            ("r", ManglingDecision::UNCHANGED),
            ("s", MANGLE),
        ])
    );
}

#[test]
fn decisions_are_stable_across_engines() {
    let interner = StringInterner::new();
    let mut builder = GraphBuilder::new(&interner);
    let meters = builder.class("units.Meters", ClassFlags::VALUE);
    let f = builder.function("f", Visibility::Public);
    builder.value_param(f, "x", TypeRef::class(meters));
    let graph = builder.finish().unwrap();

    let first = decisions(&interner, &graph);
    let second = decisions(&interner, &graph);
    assert_eq!(first, second);
}

#[test]
fn unknown_callable_is_left_alone() {
    let interner = StringInterner::new();
    let graph = GraphBuilder::new(&interner).finish().unwrap();
    let exemptions = ExemptionRegistry::standard(&interner);
    let engine = ManglingEngine::new(&graph, &exemptions);

    assert_eq!(engine.decide(CallableId::new(0)), ManglingDecision::UNCHANGED);
    assert!(engine.decide_all().is_empty());
}
