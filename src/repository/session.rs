use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;
use crate::repository::observer::StoreEvent;
use crate::repository::{AUTH_SLOT, SessionReader, SessionWriter, SnapshotRepository};
use crate::storage::Storage;

impl<S: Storage> SessionReader for SnapshotRepository<S> {
    fn current_user(&self) -> RepositoryResult<Option<User>> {
        Ok(self.session_read().current_user.clone())
    }
}

impl<S: Storage> SessionWriter for SnapshotRepository<S> {
    fn set_current_user(&self, user: &User) -> RepositoryResult<()> {
        {
            let mut state = self.session_write();
            state.current_user = Some(user.clone());
            self.persist(AUTH_SLOT, &*state)?;
        }
        self.notify(StoreEvent::Session);
        Ok(())
    }

    fn clear_current_user(&self) -> RepositoryResult<()> {
        {
            let mut state = self.session_write();
            state.current_user = None;
            self.persist(AUTH_SLOT, &*state)?;
        }
        self.notify(StoreEvent::Session);
        Ok(())
    }
}
