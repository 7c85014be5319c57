use tabula_core::{
    schema::{Builder, FieldDecl, Table, TableDecl},
    stmt::{Expr, Statement, Type},
};

fn user_decl() -> TableDecl {
    TableDecl::new("app::User", "users")
        .field(FieldDecl::new("id", Type::I64).column("u_id").primary_key().db_generated())
        .field(FieldDecl::new("name", Type::String).column("u_name"))
        .field(FieldDecl::new("email", Type::String).column("u_email").nullable())
        .field(FieldDecl::new("updated_at", Type::Timestamp).column("u_updated_at"))
}

fn user_table() -> Table {
    Builder::new().build_table(user_decl()).unwrap()
}

#[test]
fn partitions_keep_declaration_order() {
    let table = user_table();

    let names: Vec<_> = table.fields().names().collect();
    assert_eq!(names, ["id", "name", "email", "updated_at"]);

    let names: Vec<_> = table.non_primary_key().names().collect();
    assert_eq!(names, ["name", "email", "updated_at"]);

    let names: Vec<_> = table.primary_key().names().collect();
    assert_eq!(names, ["id"]);

    let names: Vec<_> = table.db_generated().names().collect();
    assert_eq!(names, ["id"]);

    let columns: Vec<_> = table.non_db_generated().columns().collect();
    assert_eq!(columns, ["u_name", "u_email", "u_updated_at"]);
}

#[test]
fn lookup_by_name_and_column() {
    let table = user_table();
    let by_name = table.fields().get("email").unwrap();
    let by_column = table.fields().get_by_column("u_email").unwrap();
    assert_eq!(by_name.name(), by_column.name());
    assert!(table.fields().get("u_email").is_none());
}

#[test]
fn missing_primary_key() {
    let decl = TableDecl::new("app::Log", "logs")
        .field(FieldDecl::new("line", Type::String).column("line"));

    let err = Builder::new().build_table(decl).unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn duplicate_column() {
    let decl = TableDecl::new("app::User", "users")
        .field(FieldDecl::new("id", Type::I64).column("id").primary_key())
        .field(FieldDecl::new("other", Type::I64).column("id"));

    let err = Builder::new().build_table(decl).unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn unsupported_field_reports_model() {
    let decl = TableDecl::new("app::User", "users")
        .field(FieldDecl::new("id", Type::I64).column("id").primary_key())
        .field(FieldDecl::new("extra", Type::Struct).column("extra"));

    let err = Builder::new().build_table(decl).unwrap_err();
    assert!(err.is_invalid_schema());
    assert!(err.to_string().starts_with("model `app::User`: "));
}

#[test]
fn table_name_prefix() {
    let table = Builder::new()
        .table_name_prefix("app_")
        .build_table(user_decl())
        .unwrap();
    assert_eq!(table.name(), "app_users");
}

#[test]
fn schema_resolves_names() {
    let schema = Builder::new().build([user_decl()]).unwrap();

    assert_eq!(schema.table_name("app::User").unwrap(), "users");
    assert_eq!(schema.column_name("app::User", "name").unwrap(), "u_name");

    let err = schema.table_name("app::Post").unwrap_err();
    assert!(err.is_unresolved_name());

    let err = schema.column_name("app::User", "nickname").unwrap_err();
    assert!(err.is_unresolved_name());
}

#[test]
fn merge_insert_params() {
    let table = user_table();
    let derived = table.merge_insert();
    assert_eq!(derived.params, ["name", "email", "updated_at"]);

    let Statement::Insert(insert) = derived.statement else {
        panic!("expected insert");
    };
    assert_eq!(insert.columns.len(), 3);
    assert_eq!(insert.synthesized_params(), 3);
    assert_eq!(insert.returning.len(), 1);
}

#[test]
fn all_insert_params() {
    let derived = user_table().all_insert();
    assert_eq!(derived.params, ["id", "name", "email", "updated_at"]);

    let Statement::Insert(insert) = derived.statement else {
        panic!("expected insert");
    };
    assert!(insert.returning.is_empty());
}

#[test]
fn update_shifts_key_condition() {
    let table = user_table();
    let derived = table.update(&["name", "updated_at"]).unwrap();
    assert_eq!(derived.params, ["name", "updated_at", "id"]);

    let Statement::Update(update) = derived.statement else {
        panic!("expected update");
    };
    assert_eq!(update.assignments.len(), 2);

    let id = table.field_expr(table.fields().get("id").unwrap());
    assert_eq!(update.filter, Some(Expr::eq(id, Expr::arg(3))));
}

#[test]
fn update_unknown_field() {
    let err = user_table().update(&["nickname"]).unwrap_err();
    assert!(err.is_unresolved_name());

    let err = user_table().update(&[]).unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn update_rejects_repeated_field() {
    let err = user_table().update(&["name", "name"]).unwrap_err();
    assert!(err.is_invalid_statement());
    assert!(err.to_string().contains("sets field `name` more than once"));

    let err = user_table()
        .update(&["name", "updated_at", "name"])
        .unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn update_all_sets_non_key_fields() {
    let derived = user_table().update_all().unwrap();
    assert_eq!(derived.params, ["name", "email", "updated_at", "id"]);
}

#[test]
fn delete_is_filtered() {
    let derived = user_table().delete();
    assert!(!derived.statement.is_unfiltered_delete());
    assert_eq!(derived.params, ["id"]);
}

#[test]
fn composite_key_nesting() {
    let decl = TableDecl::new("app::Membership", "memberships")
        .field(FieldDecl::new("a", Type::I64).column("a").primary_key())
        .field(FieldDecl::new("b", Type::I64).column("b").primary_key())
        .field(FieldDecl::new("c", Type::I64).column("c").primary_key());
    let table = Builder::new().build_table(decl).unwrap();

    let field = |name| table.field_expr(table.fields().get(name).unwrap());
    let expected = Expr::and(
        Expr::eq(field("c"), Expr::arg(3)),
        Expr::and(
            Expr::eq(field("b"), Expr::arg(2)),
            Expr::eq(field("a"), Expr::arg(1)),
        ),
    );
    assert_eq!(table.extract().condition, expected);
}
