use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    DbErr, Schema,
};

use crate::entity::{articles, authors, comments};

/// In-memory SQLite database with the article tables and a small data set
///
/// | id | author | title             | body                          | views |
/// |----|--------|-------------------|-------------------------------|-------|
/// | 1  | Ada    | Rust ownership    | Borrowing explained           | 1500  |
/// | 2  | Ada    | Async in practice | Futures and executors         | 300   |
/// | 3  | Grace  | Compilers         | Lowering Rust to machine code | 800   |
/// | 4  | Grace  | Debugging         | Finding the first bug         | 50    |
/// | 5  | Grace  | Cobol forever     | Legacy systems                | 20    |
///
/// Article 2 has the comment "found a typo", article 4 has "great read".
pub async fn seeded_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    let schema = Schema::new(DbBackend::Sqlite);

    for statement in [
        schema.create_table_from_entity(authors::Entity),
        schema.create_table_from_entity(articles::Entity),
        schema.create_table_from_entity(comments::Entity),
    ] {
        db.execute(db.get_database_backend().build(&statement))
            .await?;
    }

    for (id, name, email) in [
        (1, "Ada Lovelace", "ada@example.com"),
        (2, "Grace Hopper", "grace@example.com"),
    ] {
        authors::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
        }
        .insert(&db)
        .await?;
    }

    for (id, author_id, title, body, views) in [
        (1, 1, "Rust ownership", "Borrowing explained", 1500),
        (2, 1, "Async in practice", "Futures and executors", 300),
        (3, 2, "Compilers", "Lowering Rust to machine code", 800),
        (4, 2, "Debugging", "Finding the first bug", 50),
        (5, 2, "Cobol forever", "Legacy systems", 20),
    ] {
        articles::ActiveModel {
            id: Set(id),
            author_id: Set(author_id),
            title: Set(title.to_string()),
            body: Set(body.to_string()),
            status: Set("published".to_string()),
            views: Set(views),
            created_at: Set(NaiveDate::from_ymd_opt(2024, 1, id as u32)
                .and_then(|day| day.and_hms_opt(9, 0, 0))
                .unwrap_or_default()),
        }
        .insert(&db)
        .await?;
    }

    for (id, article_id, body) in [(1, 2, "found a typo"), (2, 4, "great read")] {
        comments::ActiveModel {
            id: Set(id),
            article_id: Set(article_id),
            body: Set(body.to_string()),
        }
        .insert(&db)
        .await?;
    }

    Ok(db)
}
