use pretty_assertions::assert_eq;
use tabula_core::{
    schema::{Builder, FieldDecl, TableDecl},
    stmt::{Statement, Type},
    Schema,
};
use tabula_sql::Serializer;

fn schema(prefix: Option<&str>) -> Schema {
    let mut builder = Builder::new();
    if let Some(prefix) = prefix {
        builder.table_name_prefix(prefix);
    }

    builder
        .build([
            TableDecl::new("app::Item", "items")
                .field(FieldDecl::new("id", Type::I64).column("id").primary_key().db_generated())
                .field(FieldDecl::new("name", Type::String).column("name"))
                .field(FieldDecl::new("updated_at", Type::Timestamp).column("updated_at")),
            TableDecl::new("app::Grant", "grants")
                .field(FieldDecl::new("user", Type::I64).column("user_id").primary_key())
                .field(FieldDecl::new("group", Type::I64).column("group_id").primary_key())
                .field(FieldDecl::new("role", Type::String).column("role"))
                .field(FieldDecl::new("meta", Type::Map).column("meta").json().nullable()),
        ])
        .unwrap()
}

fn render(schema: &Schema, stmt: &Statement) -> String {
    Serializer::postgresql(schema).serialize(stmt).unwrap()
}

#[test]
fn item_derivations() {
    let schema = schema(None);
    let table = schema.table("app::Item").unwrap();

    let fetch = table.fetch();
    assert_eq!(
        render(&schema, &fetch.statement),
        "SELECT items.name, items.updated_at FROM items WHERE items.id=$1"
    );
    assert_eq!(fetch.params, ["id"]);

    let insert = table.merge_insert();
    assert_eq!(
        render(&schema, &insert.statement),
        "INSERT INTO items (name, updated_at) VALUES ($1, $2) RETURNING id"
    );

    let insert = table.all_insert();
    assert_eq!(
        render(&schema, &insert.statement),
        "INSERT INTO items (id, name, updated_at) VALUES ($1, $2, $3)"
    );

    let update = table.update(&["name", "updated_at"]).unwrap();
    assert_eq!(
        render(&schema, &update.statement),
        "UPDATE items SET name=$1, updated_at=$2 WHERE id=$3"
    );

    let delete = table.delete();
    assert_eq!(
        render(&schema, &delete.statement),
        "DELETE FROM items WHERE id=$1"
    );
}

#[test]
fn merge_insert_numbers_without_gaps() {
    let schema = schema(None);
    for table in schema.tables() {
        let derived = table.merge_insert();
        let sql = render(&schema, &derived.statement);
        let k = table.non_db_generated().len();
        assert_eq!(derived.params.len(), k);

        for n in 1..=k {
            assert!(sql.contains(&format!("${n}")), "{sql} is missing ${n}");
        }
        assert!(!sql.contains(&format!("${}", k + 1)));
    }
}

#[test]
fn composite_key_derivations() {
    let schema = schema(None);
    let table = schema.table("app::Grant").unwrap();

    assert_eq!(
        render(&schema, &table.fetch().statement),
        "SELECT grants.role, grants.meta FROM grants \
         WHERE (grants.group_id=$2) and (grants.user_id=$1)"
    );

    let update = table.update_all().unwrap();
    assert_eq!(
        render(&schema, &update.statement),
        "UPDATE grants SET role=$1, meta=$2 WHERE (group_id=$4) and (user_id=$3)"
    );
    assert_eq!(update.params, ["role", "meta", "user", "group"]);
}

#[test]
fn prefixed_table_names() {
    let schema = schema(Some("app_"));
    let table = schema.table("app::Item").unwrap();

    assert_eq!(
        render(&schema, &table.delete().statement),
        "DELETE FROM app_items WHERE id=$1"
    );
}
