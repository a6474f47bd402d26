//! Per-column text filters over user records.

use crate::User;

/// A filterable column, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Name,
    Username,
    Email,
    Phone,
}

impl FilterField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Username, Self::Email, Self::Phone];

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Username => "username",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    pub fn placeholder(self) -> String {
        format!("Filter by {}", self.key())
    }

    pub fn value(self, user: &User) -> &str {
        match self {
            Self::Name => &user.name,
            Self::Username => &user.username,
            Self::Email => &user.email,
            Self::Phone => &user.phone,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Username => 1,
            Self::Email => 2,
            Self::Phone => 3,
        }
    }
}

/// One filter string per column. A record is kept when every column contains
/// its filter, ignoring case; empty filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl UserFilter {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Username => &self.username,
            FilterField::Email => &self.email,
            FilterField::Phone => &self.phone,
        }
    }

    pub fn get_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Name => &mut self.name,
            FilterField::Username => &mut self.username,
            FilterField::Email => &mut self.email,
            FilterField::Phone => &mut self.phone,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn clear(&mut self, field: FilterField) {
        self.get_mut(field).clear();
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }

    pub fn matches(&self, user: &User) -> bool {
        FilterField::ALL
            .iter()
            .all(|field| contains_ignore_case(field.value(user), self.get(*field)))
    }

    /// Returns the matching records in source order.
    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        if self.is_empty() {
            return users.iter().collect();
        }
        users.iter().filter(|user| self.matches(user)).collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
