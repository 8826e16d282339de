//! Platform handle model.

use serde::{Deserialize, Serialize};

use kodekaro_platform_data::Platform;

/// One user's stored platform handles.
///
/// A `None` column means the user has not set a handle for that platform,
/// or the platform rejected the one they had.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformHandles {
    pub user_id: String,
    pub email: String,
    pub codeforces: Option<String>,
    pub leetcode: Option<String>,
    pub codechef: Option<String>,
}

impl PlatformHandles {
    pub fn empty(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            codeforces: None,
            leetcode: None,
            codechef: None,
        }
    }

    pub fn handle_for(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Codeforces => self.codeforces.as_deref(),
            Platform::Leetcode => self.leetcode.as_deref(),
            Platform::Codechef => self.codechef.as_deref(),
        }
    }

    pub fn set_handle(&mut self, platform: Platform, handle: Option<String>) {
        match platform {
            Platform::Codeforces => self.codeforces = handle,
            Platform::Leetcode => self.leetcode = handle,
            Platform::Codechef => self.codechef = handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_accessors() {
        let mut handles = PlatformHandles::empty("u1", "a@x.dev");
        assert_eq!(handles.handle_for(Platform::Codeforces), None);

        handles.set_handle(Platform::Codeforces, Some("alice_cf".to_string()));
        assert_eq!(handles.handle_for(Platform::Codeforces), Some("alice_cf"));
        assert_eq!(handles.handle_for(Platform::Leetcode), None);

        handles.set_handle(Platform::Codeforces, None);
        assert_eq!(handles.handle_for(Platform::Codeforces), None);
    }
}
