use crate::domain::enums::{TokenScope, TokenStatus};
use crate::domain::request::{ensure_distinct, ensure_min_items};
use crate::domain::validation::ValidationError;
use crate::domain::value::{DomainId, Pagination, TokenId, ensure_max_chars, non_empty_trimmed};

pub const TOKEN_NAME_MAX_CHARS: usize = 50;

fn token_name(value: impl Into<String>) -> Result<String, ValidationError> {
    let name = non_empty_trimmed("name", value)?;
    ensure_max_chars("name", &name, TOKEN_NAME_MAX_CHARS)?;
    Ok(name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// `GET token`.
pub struct TokensListRequest {
    pub(crate) pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `POST token`.
pub struct TokenCreateRequest {
    pub(crate) name: String,
    pub(crate) domain_id: DomainId,
    pub(crate) scopes: Vec<TokenScope>,
}

impl TokenCreateRequest {
    pub fn new(
        name: impl Into<String>,
        domain_id: DomainId,
        scopes: Vec<TokenScope>,
    ) -> Result<Self, ValidationError> {
        let name = token_name(name)?;
        ensure_min_items(TokenScope::FIELD, scopes.len(), 1)?;
        ensure_distinct(TokenScope::FIELD, &scopes, |s| s.as_str().to_owned())?;
        Ok(Self {
            name,
            domain_id,
            scopes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scopes(&self) -> &[TokenScope] {
        &self.scopes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `PUT token/{token_id}/settings`.
pub struct TokenStatusRequest {
    pub(crate) token_id: TokenId,
    pub(crate) status: TokenStatus,
}

impl TokenStatusRequest {
    pub fn new(token_id: TokenId, status: TokenStatus) -> Self {
        Self { token_id, status }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `PUT token/{token_id}`.
pub struct TokenRenameRequest {
    pub(crate) token_id: TokenId,
    pub(crate) name: String,
}

impl TokenRenameRequest {
    pub fn new(token_id: TokenId, name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            token_id,
            name: token_name(name)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TokensBuilder {
    page: Option<u32>,
    limit: Option<u32>,
    token_id: Option<String>,
    name: Option<String>,
    domain_id: Option<String>,
    scopes: Vec<TokenScope>,
    status: Option<TokenStatus>,
}

impl TokensBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn token_id(mut self, token_id: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn domain_id(mut self, domain_id: impl Into<String>) -> Self {
        self.domain_id = Some(domain_id.into());
        self
    }

    /// Replace the scope list.
    pub fn scopes(mut self, scopes: impl IntoIterator<Item = TokenScope>) -> Self {
        self.scopes.clear();
        scopes.into_iter().fold(self, Self::add_scope)
    }

    /// Append a scope; already present scopes are ignored.
    pub fn add_scope(mut self, scope: TokenScope) -> Self {
        if !self.scopes.contains(&scope) {
            self.scopes.push(scope);
        }
        self
    }

    pub fn all_read_scopes(self) -> Self {
        TokenScope::ALL
            .iter()
            .copied()
            .filter(|s| s.is_read_only())
            .fold(self, Self::add_scope)
    }

    pub fn all_scopes(self) -> Self {
        TokenScope::ALL.iter().copied().fold(self, Self::add_scope)
    }

    pub fn status(mut self, status: TokenStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn pause(self) -> Self {
        self.status(TokenStatus::Pause)
    }

    pub fn unpause(self) -> Self {
        self.status(TokenStatus::Unpause)
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    fn require_token_id(&self) -> Result<TokenId, ValidationError> {
        TokenId::new(self.token_id.clone().unwrap_or_default())
    }

    pub fn build_list_request(&self) -> Result<TokensListRequest, ValidationError> {
        Ok(TokensListRequest {
            pagination: Pagination::from_raw(self.page, self.limit)?,
        })
    }

    pub fn build_create_request(&self) -> Result<TokenCreateRequest, ValidationError> {
        TokenCreateRequest::new(
            self.name.clone().unwrap_or_default(),
            DomainId::new(self.domain_id.clone().unwrap_or_default())?,
            self.scopes.clone(),
        )
    }

    pub fn build_status_request(&self) -> Result<TokenStatusRequest, ValidationError> {
        let token_id = self.require_token_id()?;
        let status = self
            .status
            .ok_or(ValidationError::Missing { field: "status" })?;
        Ok(TokenStatusRequest::new(token_id, status))
    }

    pub fn build_rename_request(&self) -> Result<TokenRenameRequest, ValidationError> {
        TokenRenameRequest::new(
            self.require_token_id()?,
            self.name.clone().unwrap_or_default(),
        )
    }
}
