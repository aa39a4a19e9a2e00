#[cfg(test)]
mod tests {
    use rusqlite::{params, Connection};
    use tasker::db::db::Db;
    use tasker::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};
    use tasker::db::tasks::Tasks;
    use tasker::libs::config::DatabaseLocation;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl MigrationTestContext {
        fn location(&self) -> DatabaseLocation {
            DatabaseLocation::File(self.temp_dir.path().join("tasks.db"))
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Db::new_without_migrations(&ctx.location()).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_open_applies_all_migrations(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.location()).unwrap();

        let latest = MigrationManager::new().latest_version();
        assert!(latest > 0);
        assert_eq!(get_db_version(&db.conn).unwrap(), latest);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history_is_ordered(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.location()).unwrap();

        let history = MigrationManager::new().get_migration_history(&db.conn).unwrap();
        let versions: Vec<u32> = history.iter().map(|(version, _, _)| *version).collect();
        assert_eq!(versions, vec![1, 2]);
        assert_eq!(history[0].1, "create_tasks_table");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_are_idempotent(ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations(&ctx.location()).unwrap();
        init_with_migrations(&mut conn).unwrap();
        init_with_migrations(&mut conn).unwrap();

        let history = MigrationManager::new().get_migration_history(&conn).unwrap();
        assert_eq!(history.len(), 2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopen_keeps_existing_tasks(ctx: &mut MigrationTestContext) {
        let mut tasks = Tasks::new(Db::open(&ctx.location()).unwrap());
        tasks.insert("survives restart").unwrap();
        tasks.close().unwrap();

        let mut tasks = Tasks::new(Db::open(&ctx.location()).unwrap());
        let all = tasks.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "survives restart");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_rejects_invalid_values(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.location()).unwrap();
        let insert = "INSERT INTO tasks (description, status, created_at, updated_at, priority) \
                      VALUES (?1, ?2, datetime('now'), datetime('now'), ?3)";

        assert!(db.conn.execute(insert, params!["bad status", "Terminée", 3]).is_err());
        assert!(db.conn.execute(insert, params!["bad priority", "À faire", 7]).is_err());
        assert!(db.conn.execute(insert, params!["fine", "Accomplie", 1]).is_ok());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_defaults(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.location()).unwrap();
        db.conn
            .execute(
                "INSERT INTO tasks (description, created_at, updated_at) VALUES (?1, datetime('now'), datetime('now'))",
                params!["defaults"],
            )
            .unwrap();

        let (status, priority): (String, i64) = db
            .conn
            .query_row("SELECT status, priority FROM tasks", [], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap();
        assert_eq!(status, "À faire");
        assert_eq!(priority, 3);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_unreadable_version_is_reported(ctx: &mut MigrationTestContext) {
        let conn = Db::new_without_migrations(&ctx.location()).unwrap();
        conn.execute("CREATE TABLE migrations (id INTEGER PRIMARY KEY)", []).unwrap();

        assert!(get_db_version(&conn).is_err());
        assert!(needs_migration(&conn).is_err());
        drop(conn);

        assert!(Db::open(&ctx.location()).is_err());
    }

    #[test]
    fn test_memory_database_is_migrated() {
        let db = Db::open(&DatabaseLocation::Memory).unwrap();
        assert!(!needs_migration(&db.conn).unwrap());

        let unrelated = Connection::open_in_memory().unwrap();
        assert_eq!(get_db_version(&unrelated).unwrap(), 0);
    }
}
