//! Writing the output file under a different identity.
//!
//! An [`IdentityProvider`] switches the identity the process acts as. The switch is
//! scoped with [`run_as`]: the identity is assumed right before the closure runs and
//! an [`IdentityGuard`] restores the previous one when it drops, whether the closure
//! returned, failed or panicked.

use crate::error::{PDFError, Result};

/// How the alternate identity is used.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum LogonMode {
    /// Act as the user on this machine
    Interactive,
    /// Keep the local identity, present the credentials to remote resources only
    #[default]
    NewCredentials,
}

/// A `domain\user` account along with its password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub domain: String,
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("domain", &self.domain)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Split `username` into its domain and user parts. It must contain exactly one
    /// backslash.
    pub fn parse(username: &str, password: &str) -> Result<Credentials> {
        match username.split('\\').collect::<Vec<_>>().as_slice() {
            [domain, user] => Ok(Credentials {
                domain: domain.to_string(),
                user: user.to_string(),
                password: password.to_string(),
            }),
            _ => Err(PDFError::InvalidCredentialFormat(username.to_string())),
        }
    }
}

pub trait IdentityProvider {
    /// Start acting as `credentials`
    fn assume(&self, credentials: &Credentials, mode: LogonMode) -> Result<()>;

    /// Go back to the identity held before the last successful [`assume`](Self::assume)
    fn restore(&self);
}

/// Restores the previous identity when dropped.
#[must_use]
pub struct IdentityGuard<'a, P: IdentityProvider + ?Sized> {
    provider: &'a P,
}

impl<'a, P: IdentityProvider + ?Sized> IdentityGuard<'a, P> {
    pub fn acquire(
        provider: &'a P,
        credentials: &Credentials,
        mode: LogonMode,
    ) -> Result<IdentityGuard<'a, P>> {
        provider.assume(credentials, mode)?;
        log::debug!("acting as {}\\{}", credentials.domain, credentials.user);
        Ok(IdentityGuard { provider })
    }
}

impl<P: IdentityProvider + ?Sized> Drop for IdentityGuard<'_, P> {
    fn drop(&mut self) {
        self.provider.restore();
        log::debug!("identity restored");
    }
}

/// Run `f` as `credentials`.
pub fn run_as<P, T, F>(provider: &P, credentials: &Credentials, mode: LogonMode, f: F) -> Result<T>
where
    P: IdentityProvider + ?Sized,
    F: FnOnce() -> Result<T>,
{
    let _guard = IdentityGuard::acquire(provider, credentials, mode)?;
    f()
}

/// Never switches: every closure runs as the current process identity. Platforms
/// without impersonation support use this.
#[derive(Debug, Default, Copy, Clone)]
pub struct SameIdentity;

impl IdentityProvider for SameIdentity {
    fn assume(&self, credentials: &Credentials, _: LogonMode) -> Result<()> {
        log::warn!(
            "impersonation unsupported, writing as the current user instead of {}\\{}",
            credentials.domain,
            credentials.user
        );
        Ok(())
    }

    fn restore(&self) {}
}
