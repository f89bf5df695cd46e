//! User repository implementation

use roster_core::user::User;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

use crate::{Error, Result};

/// Sample directory inserted into an empty database so a fresh checkout
/// renders a populated list
const SAMPLE_USERS: &[(&str, &str)] = &[
    ("Alice Jordan", "alice.jordan@example.com"),
    ("Albert Nash", "albert.nash@example.com"),
    ("Bruno Keller", "bruno.keller@example.com"),
    ("Carla Mendes", "carla.mendes@example.com"),
    ("Daniel Okafor", "daniel.okafor@example.com"),
    ("Elena Petrova", "elena.petrova@example.com"),
    ("Farid Haddad", "farid.haddad@example.com"),
    ("Greta Lindqvist", "greta.lindqvist@example.com"),
    ("Hiroshi Tanaka", "hiroshi.tanaka@example.com"),
    ("Ines Moreau", "ines.moreau@example.com"),
    ("Jonas Weber", "jonas.weber@example.com"),
    ("Katarina Novak", "katarina.novak@example.com"),
    ("Liam O'Brien", "liam.obrien@example.com"),
    ("Malika Diallo", "malika.diallo@example.com"),
    ("Nora Eriksen", "nora.eriksen@example.com"),
    ("Omar Haddara", "omar.haddara@example.com"),
    ("Priya Raman", "priya.raman@example.com"),
    ("Quentin Laurent", "quentin.laurent@example.com"),
    ("Rosa Delgado", "rosa.delgado@example.com"),
    ("Samuel Adeyemi", "samuel.adeyemi@example.com"),
];

/// Repository for user entities
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Count users, optionally restricted to names containing `search`
    pub async fn count(&self, search: Option<&str>) -> Result<i64> {
        debug!(?search, "counting users");

        let count = match search {
            Some(term) => {
                sqlx::query_scalar::<_, i64>(
                    r"SELECT COUNT(*) FROM users WHERE name LIKE ?1 ESCAPE '\'",
                )
                .bind(contains_pattern(term))
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        Ok(count)
    }

    /// Fetch one page of users ordered by id
    pub async fn list_page(
        &self,
        search: Option<&str>,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<User>> {
        debug!(?search, offset, limit, "listing users page");

        let rows = match search {
            Some(term) => {
                sqlx::query(
                    r"SELECT id, name, email FROM users WHERE name LIKE ?1 ESCAPE '\' ORDER BY id LIMIT ?2 OFFSET ?3",
                )
                .bind(contains_pattern(term))
                .bind(i64::from(limit))
                .bind(offset as i64)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query("SELECT id, name, email FROM users ORDER BY id LIMIT ?1 OFFSET ?2")
                    .bind(i64::from(limit))
                    .bind(offset as i64)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.iter().map(user_from_row).collect()
    }

    /// Find a user by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        debug!(id, "finding user by id");

        let row = sqlx::query("SELECT id, name, email FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Insert a user, returning the stored row
    pub async fn create(&self, name: &str, email: &str) -> Result<User> {
        debug!(name, email, "creating user");

        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?1, ?2)")
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        User::new(id, name.to_string(), email.to_string()).map_err(Error::Core)
    }

    /// Insert the bundled sample users when the table is empty
    ///
    /// Returns the number of inserted rows; zero when the table already
    /// holds data.
    pub async fn seed_sample_users(&self) -> Result<u64> {
        if self.count(None).await? > 0 {
            return Ok(0);
        }

        let mut inserted = 0;
        for (name, email) in SAMPLE_USERS {
            self.create(name, email).await?;
            inserted += 1;
        }

        info!("Seeded {} sample users", inserted);
        Ok(inserted)
    }
}

/// LIKE pattern matching names that contain `term` literally
///
/// `%`, `_`, and the escape character itself are escaped so user input
/// never acts as a wildcard.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn user_from_row(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
    })
}

include!("user_tests.rs");
