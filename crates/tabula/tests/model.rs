use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tabula::{
    stmt::{Expr, Select, Value},
    Binding, Json, Model, ModelSchema, Registry, Row, Serializer,
};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    bio: String,
    age: u8,
}

#[derive(Debug, Default, Clone, PartialEq)]
struct User {
    id: i64,
    name: String,
    email: Option<String>,
    active: bool,
    updated_at: Option<jiff::Timestamp>,
    tags: HashMap<String, i32>,
    profile: Option<Json<Profile>>,
}

impl Model for User {
    fn schema() -> ModelSchema<Self> {
        ModelSchema::new("users")
            .field(
                Binding::new("id", |u: &User| &u.id, |u| &mut u.id)
                    .column("u_id")
                    .primary_key()
                    .db_generated(),
            )
            .field(Binding::new("name", |u: &User| &u.name, |u| &mut u.name).column("u_name"))
            .field(Binding::new("email", |u: &User| &u.email, |u| &mut u.email).column("u_email"))
            .field(
                Binding::new("active", |u: &User| &u.active, |u| &mut u.active).column("u_active"),
            )
            .field(
                Binding::new("updated_at", |u: &User| &u.updated_at, |u| &mut u.updated_at)
                    .column("u_updated_at"),
            )
            .field(
                Binding::new("tags", |u: &User| &u.tags, |u| &mut u.tags)
                    .column("u_tags")
                    .json(),
            )
            .field(
                Binding::new("profile", |u: &User| &u.profile, |u| &mut u.profile)
                    .column("u_profile")
                    .json(),
            )
    }
}

#[derive(Debug, Default)]
struct Broken {
    id: i64,
    tags: HashMap<String, i32>,
}

impl Model for Broken {
    fn schema() -> ModelSchema<Self> {
        ModelSchema::new("broken")
            .field(
                Binding::new("id", |b: &Broken| &b.id, |b| &mut b.id)
                    .column("id")
                    .primary_key(),
            )
            // Map fields must be JSON encoded
            .field(Binding::new("tags", |b: &Broken| &b.tags, |b| &mut b.tags).column("tags"))
    }
}

#[derive(Debug, Default)]
struct Keyless {
    name: String,
}

impl Model for Keyless {
    fn schema() -> ModelSchema<Self> {
        ModelSchema::new("keyless")
            .field(Binding::new("name", |k: &Keyless| &k.name, |k| &mut k.name).column("name"))
    }
}

fn row(pairs: &[(&str, Value)]) -> Row {
    pairs
        .iter()
        .map(|(column, value)| (column.to_string(), value.clone()))
        .collect()
}

fn sample_user() -> User {
    User {
        id: 7,
        name: "Ann".to_string(),
        email: None,
        active: true,
        updated_at: Some("2024-03-01T12:30:00Z".parse().unwrap()),
        tags: HashMap::from([("rust".to_string(), 3)]),
        profile: Some(Json(Profile {
            bio: "hello".to_string(),
            age: 30,
        })),
    }
}

#[test]
fn fetch_and_map_row() {
    let registry = Registry::new();
    let users = registry.register::<User>().unwrap();

    let fetch = users.table().fetch();
    let sql = Serializer::postgresql(&registry)
        .serialize(&fetch.statement)
        .unwrap();
    assert_eq!(
        sql,
        "SELECT users.u_name, users.u_email, users.u_active, users.u_updated_at, \
         users.u_tags, users.u_profile FROM users WHERE users.u_id=$1"
    );

    let user = sample_user();
    assert_eq!(users.bind(&fetch, &user).unwrap(), [Value::I64(7)]);

    let mut loaded = User {
        id: 7,
        ..User::default()
    };
    let raw = row(&[
        ("u_name", Value::Bytes(b"Ann".to_vec())),
        ("u_email", Value::Null),
        ("u_active", Value::Bool(true)),
        ("u_updated_at", Value::from("2024-03-01T12:30:00Z")),
        ("u_tags", Value::Bytes(br#"{"rust": 3}"#.to_vec())),
        ("u_profile", Value::Bytes(br#"{"bio": "hello", "age": 30}"#.to_vec())),
        ("unmapped", Value::I64(99)),
    ]);
    users.npk().apply(&raw, &mut loaded).unwrap();

    assert_eq!(loaded, user);
}

#[test]
fn null_json_field_loads_none() {
    let registry = Registry::new();
    let users = registry.register::<User>().unwrap();

    let raw = row(&[("u_id", Value::I64(1)), ("u_profile", Value::Null)]);
    let user = users.all().load(&raw).unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.profile, None);
}

#[test]
fn merge_insert_binds_json_as_bytes() {
    let registry = Registry::new();
    let users = registry.register::<User>().unwrap();

    let insert = users.table().merge_insert();
    assert_eq!(
        insert.params,
        ["name", "email", "active", "updated_at", "tags", "profile"]
    );

    let args = users.bind(&insert, &sample_user()).unwrap();
    assert_eq!(args.len(), 6);
    assert_eq!(args[0], Value::from("Ann"));
    assert_eq!(args[1], Value::Null);
    assert_eq!(args[2], Value::Bool(true));
    assert_eq!(args[4], Value::Bytes(br#"{"rust":3}"#.to_vec()));

    let Value::Bytes(profile) = &args[5] else {
        panic!("expected bytes, got {:?}", args[5]);
    };
    let profile: Profile = serde_json::from_slice(profile).unwrap();
    assert_eq!(profile.age, 30);

    let returned = row(&[("u_id", Value::I64(42))]);
    let mut user = sample_user();
    users.returning().apply(&returned, &mut user).unwrap();
    assert_eq!(user.id, 42);
}

#[test]
fn update_binds_set_then_key() {
    let registry = Registry::new();
    let users = registry.register::<User>().unwrap();

    let update = users.table().update(&["name", "updated_at"]).unwrap();
    let sql = Serializer::postgresql(&registry)
        .serialize(&update.statement)
        .unwrap();
    assert_eq!(
        sql,
        "UPDATE users SET u_name=$1, u_updated_at=$2 WHERE u_id=$3"
    );

    let args = users.bind(&update, &sample_user()).unwrap();
    assert_eq!(args[0], Value::from("Ann"));
    assert_eq!(args[2], Value::I64(7));
}

#[test]
fn failed_extraction_leaves_model_untouched() {
    let registry = Registry::new();
    let users = registry.register::<User>().unwrap();

    let mut user = sample_user();
    let raw = row(&[
        ("u_name", Value::from("Bob")),
        ("u_active", Value::from("yes")),
    ]);

    let err = users.npk().apply(&raw, &mut user).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "column `u_active`: cannot convert String to bool");
    assert_eq!(user, sample_user());
}

#[test]
fn failed_field_conversion_leaves_model_untouched() {
    let registry = Registry::new();
    let users = registry.register::<User>().unwrap();

    let mut user = sample_user();
    let raw = row(&[
        ("u_name", Value::from("Bob")),
        ("u_tags", Value::Bytes(br#"{"a": "not-an-int"}"#.to_vec())),
    ]);

    let err = users.npk().apply(&raw, &mut user).unwrap_err();
    assert!(err.is_json());
    assert!(err.to_string().starts_with("column `u_tags`: json: "));
    assert_eq!(user, sample_user());

    // `age` is a u8
    let raw = row(&[
        ("u_name", Value::from("Bob")),
        ("u_profile", Value::Bytes(br#"{"bio": "", "age": 300}"#.to_vec())),
    ]);
    assert!(users.npk().apply(&raw, &mut user).is_err());
    assert_eq!(user, sample_user());
}

#[test]
fn non_nullable_column_rejects_null() {
    let registry = Registry::new();
    let users = registry.register::<User>().unwrap();

    let err = users
        .all()
        .load(&row(&[("u_active", Value::Null)]))
        .unwrap_err();
    assert_eq!(err.to_string(), "column `u_active`: cannot convert Null to bool");
}

#[test]
fn registration_errors() {
    let registry = Registry::new();

    let err = registry.register::<Broken>().unwrap_err();
    assert!(err.is_invalid_schema());

    let err = registry.register::<Keyless>().unwrap_err();
    assert!(err.is_invalid_schema());

    assert!(registry.is_empty());
}

#[test]
fn registry_caches_tables() {
    let registry = Registry::builder().table_name_prefix("app_").build();
    let first = registry.register::<User>().unwrap();
    let second = registry.register::<User>().unwrap();

    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(first.table().name(), "app_users");
    assert_eq!(registry.len(), 1);
}

#[test]
fn concurrent_registration_builds_once() {
    let registry = Registry::new();

    let tables: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| registry.register::<User>().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for table in &tables[1..] {
        assert!(std::sync::Arc::ptr_eq(&tables[0], table));
    }
    assert_eq!(registry.len(), 1);
}

#[test]
fn queries_resolve_through_registry() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let registry = Registry::new();
    registry.register::<User>().unwrap();

    let users = tabula::stmt::TableRef::new(User::type_name());
    let stmt = Select::fields(["name", "email"])
        .from(users.clone())
        .filter(Expr::eq(users.field("active"), true))
        .order_by([Expr::desc(users.field("updated_at"))])
        .limit(5);

    let sql = Serializer::postgresql(&registry)
        .serialize(&stmt.into())
        .unwrap();
    assert_eq!(
        sql,
        "SELECT users.u_name, users.u_email FROM users \
         WHERE users.u_active=TRUE ORDER BY users.u_updated_at DESC LIMIT 5"
    );
}

#[test]
fn model_table_field_reference() {
    let registry = Registry::new();
    let users = registry.register::<User>().unwrap();

    assert!(users.field("name").is_ok());
    let err = users.field("nickname").unwrap_err();
    assert!(err.is_unresolved_name());
}
