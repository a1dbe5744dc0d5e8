/*
package com.example.sample;

public abstract class Sample implements Runnable {
    private long total;

    public Sample(android.content.Context context) { ... }

    public static int parse(String text, int radix) { ... }

    private void accumulate(long amount, double factor) { ... }

    protected abstract Object[] snapshot(int[] indices);

    public final synchronized boolean offer(Object item) { ... }

    public void run() { ... }

    static { ... }
}

Compiled with debug names stripped for `snapshot` and `offer`.
*/

use std::{sync::Arc, thread};

use dexscope::prelude::*;

fn sample_methods() -> Vec<ImmutableMethod> {
    vec![
        MethodBuilder::new()
            .access_flags(AccessFlags::PUBLIC | AccessFlags::CONSTRUCTOR)
            .name("<init>")
            .return_type("V")
            .parameter("Landroid/content/Context;", Some("context"))
            .build()
            .unwrap(),
        MethodBuilder::new()
            .access_flags(AccessFlags::PUBLIC | AccessFlags::STATIC)
            .name("parse")
            .return_type("I")
            .parameter("Ljava/lang/String;", Some("text"))
            .parameter("I", Some("radix"))
            .build()
            .unwrap(),
        MethodBuilder::new()
            .access_flags(AccessFlags::PRIVATE)
            .name("accumulate")
            .return_type("V")
            .parameter("J", Some("amount"))
            .parameter("D", Some("factor"))
            .build()
            .unwrap(),
        MethodBuilder::new()
            .access_flags(AccessFlags::PROTECTED | AccessFlags::ABSTRACT)
            .name("snapshot")
            .return_type("[Ljava/lang/Object;")
            .parameter("[I", None::<&str>)
            .build()
            .unwrap(),
        MethodBuilder::new()
            .access_flags(
                AccessFlags::PUBLIC | AccessFlags::FINAL | AccessFlags::DECLARED_SYNCHRONIZED,
            )
            .name("offer")
            .return_type("Z")
            .parameter("Ljava/lang/Object;", None::<&str>)
            .build()
            .unwrap(),
        MethodBuilder::new()
            .access_flags(AccessFlags::PUBLIC)
            .name("run")
            .return_type("V")
            .build()
            .unwrap(),
        MethodBuilder::new()
            .access_flags(AccessFlags::STATIC | AccessFlags::CONSTRUCTOR)
            .name("<clinit>")
            .return_type("V")
            .build()
            .unwrap(),
    ]
}

#[test]
fn sample_class() {
    let methods = sample_methods();

    verify_dispatch(&methods);
    verify_modifiers(&methods);
    verify_registers(&methods);
    verify_shorties(&methods);
    verify_rendering(&methods);
}

/// Direct methods are the ones DEX puts into `direct_methods`
fn verify_dispatch(methods: &[ImmutableMethod]) {
    let (direct, virtuals) = partition_methods(methods);

    let direct: Vec<_> = direct.iter().map(|m| m.name.as_str()).collect();
    let virtuals: Vec<_> = virtuals.iter().map(|m| m.name.as_str()).collect();

    assert_eq!(direct, vec!["<init>", "parse", "accumulate", "<clinit>"]);
    assert_eq!(virtuals, vec!["snapshot", "offer", "run"]);
}

fn verify_modifiers(methods: &[ImmutableMethod]) {
    let flags: Vec<(bool, bool, bool, bool)> = methods
        .iter()
        .map(|m| (is_abstract(m), is_static(m), is_default(m), is_constructor(m)))
        .collect();

    assert_eq!(
        flags,
        vec![
            (false, false, false, true),
            (false, true, false, false),
            (false, false, false, false),
            (true, false, false, false),
            (false, false, false, false),
            (false, false, false, false),
            (false, true, false, false),
        ]
    );
}

/// Matches the `ins_size` d8 emits for each method
fn verify_registers(methods: &[ImmutableMethod]) {
    let counts: Vec<usize> = methods
        .iter()
        .map(method_parameter_register_count)
        .collect();

    assert_eq!(counts, vec![2, 2, 5, 2, 2, 1, 0]);
}

fn verify_shorties(methods: &[ImmutableMethod]) {
    let shorties: Vec<String> = methods.iter().map(reference_shorty).collect();

    assert_eq!(shorties, vec!["VL", "ILI", "VJD", "LL", "ZL", "V", "V"]);
}

fn verify_rendering(methods: &[ImmutableMethod]) {
    let rendered: Vec<String> = methods.iter().map(to_source_style_string).collect();

    assert_eq!(
        rendered,
        vec![
            "public constructor void <init>(android.content.Context context)",
            "public static int parse(java.lang.String text, int radix)",
            "private void accumulate(long amount, double factor)",
            "protected abstract java.lang.Object[] snapshot(int[] arr)",
            "public final declared-synchronized boolean offer(java.lang.Object obj)",
            "public void run()",
            "static constructor void <clinit>()",
        ]
    );
    assert_eq!(methods[5].to_string(), rendered[5]);
}

#[test]
fn call_site_references() {
    let invoke_static = MethodReferenceBuilder::new()
        .name("parse")
        .return_type("I")
        .parameter_type("Ljava/lang/String;")
        .parameter_type("I")
        .build()
        .unwrap();
    let invoke_direct = MethodReferenceBuilder::new()
        .name("<init>")
        .return_type("V")
        .parameter_type("Landroid/content/Context;")
        .build()
        .unwrap();

    assert_eq!(reference_parameter_register_count(&invoke_static, true), 2);
    assert_eq!(reference_parameter_register_count(&invoke_direct, false), 2);
    assert!(!is_constructor(&invoke_static));
    assert!(is_constructor(&invoke_direct));
    assert_eq!(reference_shorty(&invoke_static), "ILI");
    assert_eq!(invoke_static.to_string(), "parse(Ljava/lang/String;I)I");
}

/// A producer with its own representation only has to implement the traits
struct RawMethod {
    flags: u32,
    name: &'static str,
    proto: (&'static str, Vec<&'static str>),
}

struct RawParameter(&'static str);

impl MethodParameter for RawParameter {
    fn type_descriptor(&self) -> &str {
        self.0
    }

    fn name(&self) -> Option<&str> {
        None
    }
}

struct RawMethodWithParams {
    method: RawMethod,
    params: Vec<RawParameter>,
}

impl MethodReference for RawMethodWithParams {
    fn name(&self) -> &str {
        self.method.name
    }

    fn return_type(&self) -> &str {
        self.method.proto.0
    }

    fn parameter_types(&self) -> Vec<&str> {
        self.method.proto.1.clone()
    }
}

impl Method for RawMethodWithParams {
    type Parameter = RawParameter;

    fn access_flags(&self) -> AccessFlags {
        AccessFlags::from_raw(self.method.flags)
    }

    fn parameters(&self) -> &[RawParameter] {
        &self.params
    }
}

#[test]
fn foreign_method_representation() {
    let types = vec!["J", "[Ljava/lang/String;"];
    let method = RawMethodWithParams {
        method: RawMethod {
            flags: 0x0009,
            name: "main",
            proto: ("V", types.clone()),
        },
        params: types.into_iter().map(RawParameter).collect(),
    };

    assert!(is_direct(&method));
    assert_eq!(method_parameter_register_count(&method), 3);
    assert_eq!(reference_shorty(&method), "VJL");
    assert_eq!(
        to_source_style_string(&method),
        "public static void main(long val, java.lang.String[] arr)"
    );
}

#[test]
fn concurrent_derivation() {
    let methods = Arc::new(sample_methods());
    let expected: Vec<String> = methods.iter().map(to_source_style_string).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let methods = Arc::clone(&methods);
            thread::spawn(move || {
                methods
                    .iter()
                    .map(to_source_style_string)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
