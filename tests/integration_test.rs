use pcore::{
    AliasPolicy, CatalogOptions, InitArgs, InitConvention, Instance, NamespaceBuilder,
    NamespaceNode, Number, ObjectType, PcoreError, PrimitiveValue, TypeContext, TypeDescriptor,
    Value, WellKnown,
};
use pretty_assertions::assert_eq;

fn json(input: &str) -> Value {
    serde_json::from_str(input).expect("valid json")
}

/// Puppet-like layout: types, sub-namespaces and non-type helpers side by side.
fn puppet_namespace() -> NamespaceNode {
    let deferred = ObjectType::new()
        .attribute("name")
        .attribute_with_default("arguments", Vec::<Value>::new())
        .into_descriptor("Deferred", InitConvention::Structured);
    let sensitive = ObjectType::new()
        .attribute("value")
        .into_descriptor("Sensitive", InitConvention::Positional);
    let timespan = TypeDescriptor::from_fn("Timespan", InitConvention::Positional, |i, args| {
        let seconds = match args.into_positional().as_slice() {
            [Value::Primitive(p)] => p.to_number()?.to_float(),
            [Value::Primitive(h), Value::Primitive(m), Value::Primitive(s)] => {
                h.to_number()?.to_float() * 3600.0
                    + m.to_number()?.to_float() * 60.0
                    + s.to_number()?.to_float()
            }
            other => {
                return Err(PcoreError::arity("Timespan", 3, other.len()));
            }
        };
        i.set_scalar(seconds);
        Ok(())
    });

    NamespaceBuilder::new()
        .namespace("Pcore", |pcore| {
            pcore
                .register(deferred)
                .register(sensitive)
                .member("version", "1.0.0")
                .member("loadedAt", 0)
        })
        .namespace("Time", |time| time.register(timespan))
        .build()
}

#[test]
fn catalog_names_every_resolvable_type() {
    let _ = pretty_env_logger::try_init();
    let ctx = TypeContext::new(puppet_namespace());
    for name in ["Pcore::Deferred", "Pcore::Sensitive", "Time::Timespan"] {
        let descriptor = ctx.parse_type(name).expect(name);
        assert_eq!(ctx.name_for(&descriptor), Some(name));
    }
    assert_eq!(ctx.type_names().len(), 3);
    assert!(ctx.type_names().collisions().is_empty());
}

#[test]
fn helpers_are_not_types() {
    let ctx = TypeContext::new(puppet_namespace());
    assert_eq!(ctx.parse_type("Pcore::version"), None);
    assert_eq!(ctx.parse_type("Pcore"), None);
    assert_eq!(ctx.parse_type("Pcore::Deferred::Extra"), None);
}

#[test]
fn structured_type_from_json() {
    let ctx = TypeContext::new(puppet_namespace());
    let deferred = ctx
        .create_named("Pcore::Deferred", json(r#"{"arguments": ["a", 1], "name": "lookup"}"#))
        .expect("deferred");
    assert_eq!(deferred.get("name"), Some(&Value::from("lookup")));
    assert_eq!(deferred.to_string(), "Deferred{name = lookup,arguments = [a,1]}");
}

#[test]
fn positional_type_depends_on_key_order() {
    let ctx = TypeContext::new(puppet_namespace());
    let forward = ctx
        .create_named("Time::Timespan", json(r#"{"h": 1, "m": 2, "s": 3}"#))
        .expect("timespan");
    let shuffled = ctx
        .create_named("Time::Timespan", json(r#"{"s": 3, "m": 2, "h": 1}"#))
        .expect("timespan");
    assert_eq!(forward.scalar(), Some(&PrimitiveValue::from(3723.0)));
    assert_eq!(shuffled.scalar(), Some(&PrimitiveValue::from(10921.0)));
}

#[test]
fn scalar_is_single_positional_argument() {
    let ctx = TypeContext::new(puppet_namespace());
    let span = ctx.create_named("Time::Timespan", 90).expect("timespan");
    assert!(matches!(
        span.scalar(),
        Some(PrimitiveValue::Number(Number::Float(f))) if *f == 90.0
    ));

    let secret = ctx.create_named("Pcore::Sensitive", "hunter2").expect("sensitive");
    assert_eq!(secret.get("value"), Some(&Value::from("hunter2")));
}

#[test]
fn empty_record_allocates_only() {
    let ctx = TypeContext::new(puppet_namespace());
    let bare: Instance = ctx.create_named("Pcore::Deferred", json("{}")).expect("bare");
    assert!(!bare.is_initialized());
    assert_eq!(bare.get("arguments"), None);
}

#[test]
fn construction_failures_propagate() {
    let ctx = TypeContext::new(puppet_namespace());
    assert_eq!(
        ctx.create_named("Time::Timespan", json(r#"{"h": 1, "m": 2}"#)),
        Err(PcoreError::arity("Timespan", 3, 2))
    );
    assert!(matches!(
        ctx.create_named("Pcore::Deferred", json(r#"{"nme": "typo"}"#)),
        Err(PcoreError::UnknownField(_))
    ));
    assert!(matches!(
        ctx.create_named("Integer", "twelve"),
        Err(PcoreError::ConversionError(_))
    ));
}

#[test]
fn well_known_types_win_and_are_not_cataloged() {
    let local_string = TypeDescriptor::from_fn("String", InitConvention::Positional, |_, _| {
        Err(PcoreError::construction("namespace String must never be used"))
    });
    let ctx = TypeContext::new(NamespaceBuilder::new().register(local_string.clone()));
    let resolved = ctx.parse_type("String").expect("well-known");
    assert_eq!(resolved, WellKnown::String.descriptor());
    assert_ne!(resolved, local_string);
    assert_eq!(ctx.name_for(&resolved), None);
    assert_eq!(ctx.name_for(&local_string), Some("String"));

    let s = ctx.create_instance(&resolved, 1.5).expect("string");
    assert_eq!(s.scalar(), Some(&PrimitiveValue::from("1.5")));
}

#[test]
fn well_known_from_record_uses_positional_values() {
    let ctx = TypeContext::new(NamespaceNode::default());
    let n = ctx
        .create_named("Number", json(r#"{"value": "2.5"}"#))
        .expect("number");
    assert!(matches!(
        n.scalar(),
        Some(PrimitiveValue::Number(Number::Float(f))) if *f == 2.5
    ));

    let i = ctx
        .create_named("Integer", json(r#"{"value": 4.0}"#))
        .expect("integer");
    assert!(matches!(
        i.scalar(),
        Some(PrimitiveValue::Number(Number::Int(4)))
    ));
}

#[test]
fn alias_policy_is_configurable() {
    let shared = TypeDescriptor::from_fn("Shared", InitConvention::Structured, |_, _| Ok(()));
    let root = NamespaceBuilder::new()
        .namespace("First", |b| b.register(shared.clone()))
        .namespace("Second", |b| b.register(shared.clone()))
        .build();

    let last = TypeContext::new(root.clone());
    assert_eq!(last.name_for(&shared), Some("Second::Shared"));

    let first = TypeContext::with_options(
        root,
        CatalogOptions {
            alias_policy: AliasPolicy::FirstWins,
        },
    );
    assert_eq!(first.name_for(&shared), Some("First::Shared"));
    assert_eq!(first.type_names().collisions().len(), 1);
}

#[test]
fn shared_across_threads() {
    let ctx = std::sync::Arc::new(TypeContext::new(puppet_namespace()));
    let handles: Vec<_> = (0..4i64)
        .map(|i| {
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                ctx.create_named("Time::Timespan", i)
                    .map(|span| span.scalar().cloned())
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().expect("thread");
        assert_eq!(result, Ok(Some(PrimitiveValue::from(i as f64))));
    }
}

#[test]
fn custom_factory_sees_raw_arguments() {
    let echo = TypeDescriptor::from_fn("Echo", InitConvention::Structured, |i, args| {
        match args {
            InitArgs::Structured(fields) => {
                for (k, v) in fields {
                    i.set_field(k, v);
                }
            }
            InitArgs::Positional(values) => i.set_field("args", values),
        }
        Ok(())
    });
    let ctx = TypeContext::new(NamespaceBuilder::new().register(echo));
    let from_record = ctx
        .create_named("Echo", json(r#"{"b": 1, "a": {"nested": true}}"#))
        .expect("echo");
    assert_eq!(
        from_record.into_value(),
        json(r#"{"b": 1, "a": {"nested": true}}"#)
    );
    let from_scalar = ctx.create_named("Echo", "x").expect("echo");
    assert_eq!(from_scalar.get("args"), Some(&json(r#"["x"]"#)));
}
