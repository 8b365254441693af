//! Link management and redirect resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkChanges, NewLink, Stats};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, already_exists_message};
use crate::utils::validation::validate_link;

/// Raw values submitted for a new link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkInput {
    pub slug: String,
    pub url: String,
    pub description: String,
}

impl LinkInput {
    pub fn new(
        slug: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            url: url.into(),
            description: description.into(),
        }
    }

    /// Trims every field and lowercases the slug.
    pub fn normalized(&self) -> Self {
        Self {
            slug: self.slug.trim().to_lowercase(),
            url: self.url.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

/// Everything the listing page shows.
#[derive(Debug, Clone)]
pub struct Overview {
    pub links: Vec<Link>,
    pub stats: Stats,
}

/// Service for creating, editing, deleting and following links.
///
/// Validation errors are collected into one [`AppError::Validation`] list so
/// that a form can show every problem at once.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Loads all links (newest first) together with aggregate stats.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn overview(&self) -> Result<Overview, AppError> {
        let links = self.link_repository.list_all().await?;
        let stats = self.link_repository.stats().await?;
        Ok(Overview { links, stats })
    }

    /// Returns every link, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Returns aggregate totals across all links.
    pub async fn stats(&self) -> Result<Stats, AppError> {
        self.link_repository.stats().await
    }

    /// Retrieves a link by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this slug.
    pub async fn get_link(&self, slug: &str) -> Result<Link, AppError> {
        self.link_repository
            .get(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(slug.to_string()))
    }

    /// Creates a link from submitted values.
    ///
    /// The input is normalized first (see [`LinkInput::normalized`]). Only
    /// when both fields pass validation is the slug's availability checked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with the format messages if the slug
    /// or URL is rejected, or with the "already exists" message if the slug
    /// is taken (including a concurrent insert that wins the race). Returns [`AppError::Database`] on database errors.
    pub async fn create_link(&self, input: LinkInput) -> Result<Link, AppError> {
        let input = input.normalized();

        let mut errors = validate_link(&input.slug, &input.url);
        if errors.is_empty() && self.link_repository.get(&input.slug).await?.is_some() {
            errors.push(already_exists_message(&input.slug));
        }

        if !errors.is_empty() {
            tracing::debug!(slug = %input.slug, ?errors, "Rejected new link");
            return Err(AppError::Validation(errors));
        }

        let new_link = NewLink {
            slug: input.slug,
            url: input.url,
            description: input.description,
        };

        match self.link_repository.create(new_link).await {
            Ok(link) => {
                tracing::info!(slug = %link.slug, url = %link.url, "Link created");
                Ok(link)
            }
            Err(AppError::Conflict(slug)) => {
                Err(AppError::Validation(vec![already_exists_message(&slug)]))
            }
            Err(e) => Err(e),
        }
    }

    /// Replaces the destination and description of an existing link.
    ///
    /// Returns whether a link was changed; a missing slug is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the slug or new URL is rejected.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn update_link(
        &self,
        slug: &str,
        url: &str,
        description: &str,
    ) -> Result<bool, AppError> {
        let changes = LinkChanges {
            url: url.trim().to_string(),
            description: description.trim().to_string(),
        };

        let errors = validate_link(slug, &changes.url);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let updated = self.link_repository.update(slug, changes).await?;
        if updated {
            tracing::info!(slug = %slug, "Link updated");
        } else {
            tracing::debug!(slug = %slug, "Update skipped, link does not exist");
        }

        Ok(updated)
    }

    /// Deletes a link. Deleting a missing slug is not an error.
    pub async fn delete_link(&self, slug: &str) -> Result<bool, AppError> {
        let deleted = self.link_repository.delete(slug).await?;
        if deleted {
            tracing::info!(slug = %slug, "Link deleted");
        }

        Ok(deleted)
    }

    /// Looks up a link for redirection and counts the hit.
    ///
    /// Returns the link as it was before the hit was recorded, or `None` for
    /// an unknown slug (no hit is recorded then).
    pub async fn resolve(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let Some(link) = self.link_repository.get(slug).await? else {
            return Ok(None);
        };

        self.link_repository.record_hit(slug).await?;
        Ok(Some(link))
    }
}
