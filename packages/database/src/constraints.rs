//! Scoped relaxation of foreign-key enforcement.
//!
//! Bulk loads write parent and child tables in separate passes and empty
//! tables in an order the constraints would otherwise reject. Enforcement is
//! switched off around that work and must be back on afterwards whether the
//! work succeeded or not.

use std::future::Future;

use crate::DbError;

/// Something that can switch referential enforcement on and off.
pub trait ForeignKeyToggle {
    /// Enables or disables foreign-key enforcement.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Constraint`] if the setting cannot be changed.
    fn set_foreign_keys(&self, enabled: bool) -> impl Future<Output = Result<(), DbError>>;
}

/// Runs `work` with foreign keys disabled, then re-enables them.
///
/// Enforcement is restored on both the success and the error path. If
/// `work` fails, its error is returned even when restoring also fails (the
/// restore failure is logged). If `work` succeeds but restoring fails, the
/// restore error is returned.
///
/// # Errors
///
/// Returns the error from disabling enforcement, from `work`, or from
/// re-enabling enforcement, in that order of precedence.
pub async fn with_relaxed_foreign_keys<C, T, F>(toggle: &C, work: F) -> Result<T, DbError>
where
    C: ForeignKeyToggle,
    F: Future<Output = Result<T, DbError>>,
{
    toggle.set_foreign_keys(false).await?;

    let result = work.await;
    let restored = toggle.set_foreign_keys(true).await;

    match (result, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(restore)) => {
            log::error!("Failed to re-enable foreign keys after error: {restore}");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<bool>>,
        fail_enable: bool,
    }

    impl ForeignKeyToggle for Recorder {
        async fn set_foreign_keys(&self, enabled: bool) -> Result<(), DbError> {
            self.calls.lock().unwrap().push(enabled);
            if enabled && self.fail_enable {
                return Err(DbError::Constraint {
                    message: "locked".to_string(),
                });
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn restores_after_success() {
        let rec = Recorder::default();
        let value = with_relaxed_foreign_keys(&rec, async { Ok(7) })
            .await
            .unwrap();

        assert_eq!(value, 7);
        assert_eq!(*rec.calls.lock().unwrap(), vec![false, true]);
    }

    #[tokio::test]
    async fn restores_after_failure() {
        let rec = Recorder::default();
        let result: Result<(), _> = with_relaxed_foreign_keys(&rec, async {
            Err(DbError::Database("boom".to_string()))
        })
        .await;

        assert!(matches!(result, Err(DbError::Database(ref m)) if m == "boom"));
        assert_eq!(*rec.calls.lock().unwrap(), vec![false, true]);
    }

    #[tokio::test]
    async fn work_error_wins_over_restore_error() {
        let rec = Recorder {
            fail_enable: true,
            ..Recorder::default()
        };
        let result: Result<(), _> = with_relaxed_foreign_keys(&rec, async {
            Err(DbError::Database("boom".to_string()))
        })
        .await;

        assert!(matches!(result, Err(DbError::Database(_))));
    }

    #[tokio::test]
    async fn restore_error_surfaces_after_success() {
        let rec = Recorder {
            fail_enable: true,
            ..Recorder::default()
        };
        let result = with_relaxed_foreign_keys(&rec, async { Ok(()) }).await;

        assert!(matches!(result, Err(DbError::Constraint { .. })));
    }
}
