use std::path::PathBuf;
use crate::errors::StoreResult;
use crate::models::{Role, UserRecord};
use super::CsvTable;

/// Credential-role records backed by the users CSV file.
///
/// Usernames are not unique: registering the same name twice keeps both
/// rows, and `authenticate` answers with the first one whose password
/// matches.
#[derive(Clone)]
pub struct UserStore {
    table: CsvTable<UserRecord>,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { table: CsvTable::new(path) }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.table.columns()
    }

    pub fn load(&self) -> StoreResult<Vec<UserRecord>> {
        self.table.load()
    }

    /// Appends a user and rewrites the whole file. Nothing is validated.
    pub fn register(&self, username: &str, password: &str, role: Role) -> StoreResult<UserRecord> {
        let mut users = self.table.load()?;
        let user = UserRecord {
            username: username.to_string(),
            password: password.to_string(),
            role,
        };
        users.push(user.clone());
        self.table.save(&users)?;

        tracing::info!("Registered user {} as {}", username, user.role);
        Ok(user)
    }

    /// Role of the first record matching both fields exactly, or `None`.
    /// Blank credentials never match, even against a blank stored row.
    pub fn authenticate(&self, username: &str, password: &str) -> StoreResult<Option<Role>> {
        if username.is_empty() || password.is_empty() {
            return Ok(None);
        }

        let role = self
            .table
            .load()?
            .into_iter()
            .find(|u| u.username == username && u.password == password)
            .map(|u| u.role);

        if role.is_none() {
            tracing::debug!("No matching credentials for {}", username);
        }
        Ok(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, UserStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::new(dir.path().join("users.csv"));
        (dir, store)
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let (_dir, store) = store();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.columns(), &["Username", "Password", "Role"]);
    }

    #[test]
    fn test_register_then_authenticate() {
        let (_dir, store) = store();
        store.register("alice", "pw1", Role::FarmerClient).unwrap();

        assert_eq!(store.authenticate("alice", "pw1").unwrap(), Some(Role::FarmerClient));
        assert_eq!(store.authenticate("alice", "wrong").unwrap(), None);
        assert_eq!(store.authenticate("Alice", "pw1").unwrap(), None);
    }

    #[test]
    fn test_every_role_authenticates() {
        let (_dir, store) = store();
        let users = [
            ("root", "r00t", Role::Admin),
            ("fred", "farm", Role::FarmerClient),
            ("wendy", "wrench", Role::MaintenanceWorker),
        ];
        for (u, p, r) in users {
            store.register(u, p, r.clone()).unwrap();
            assert_eq!(store.authenticate(u, p).unwrap(), Some(r));
        }
    }

    #[test]
    fn test_blank_credentials_never_match() {
        let (_dir, store) = store();
        store.register("", "", Role::Admin).unwrap();
        store.register("bob", "", Role::Admin).unwrap();
        store.register("", "pw", Role::Admin).unwrap();

        assert_eq!(store.authenticate("", "").unwrap(), None);
        assert_eq!(store.authenticate("bob", "").unwrap(), None);
        assert_eq!(store.authenticate("", "pw").unwrap(), None);
    }

    #[test]
    fn test_duplicate_usernames_first_match_wins() {
        let (_dir, store) = store();
        store.register("sam", "same", Role::MaintenanceWorker).unwrap();
        store.register("sam", "same", Role::FarmerClient).unwrap();
        store.register("sam", "other", Role::Admin).unwrap();

        assert_eq!(store.load().unwrap().len(), 3);
        assert_eq!(store.authenticate("sam", "same").unwrap(), Some(Role::MaintenanceWorker));
        assert_eq!(store.authenticate("sam", "other").unwrap(), Some(Role::Admin));
    }

    #[test]
    fn test_load_is_repeatable_and_ordered() {
        let (_dir, store) = store();
        store.register("a", "1", Role::FarmerClient).unwrap();
        store.register("b", "2", Role::MaintenanceWorker).unwrap();

        let first = store.load().unwrap();
        let second = store.load().unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|u| u.username.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_unknown_role_does_not_lock_out_other_users() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.csv");
        std::fs::write(&path, "Username,Password,Role\nalice,pw1,Farmer/Client\nboss,x,admin\n").unwrap();

        let store = UserStore::new(&path);
        assert_eq!(store.authenticate("alice", "pw1").unwrap(), Some(Role::FarmerClient));
        assert_eq!(
            store.authenticate("boss", "x").unwrap(),
            Some(Role::Other("admin".to_string()))
        );

        store.register("wendy", "wrench", Role::MaintenanceWorker).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("boss,x,admin\n"));
        assert!(written.contains("wendy,wrench,Maintenance Worker\n"));
    }

    #[test]
    fn test_reads_file_written_elsewhere() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.csv");
        std::fs::write(
            &path,
            "Username,Password,Role\nboss,s3cret,Admin\nfixer,tools,Maintenance Worker\n",
        )
        .unwrap();

        let store = UserStore::new(&path);
        assert_eq!(store.authenticate("boss", "s3cret").unwrap(), Some(Role::Admin));
        assert_eq!(store.authenticate("fixer", "tools").unwrap(), Some(Role::MaintenanceWorker));
    }
}
