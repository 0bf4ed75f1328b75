use mediator::Event;

use crate::commands::hydrate_catalog::HydrateOutcome;
use crate::models::product::Product;

#[derive(Debug, Clone)]
pub struct ProductAddedEvent(pub Product);
impl Event for ProductAddedEvent {}

#[derive(Debug, Clone)]
pub struct ProductDeletedEvent(pub Product);
impl Event for ProductDeletedEvent {}

/// Carries how many products the reset dropped.
#[derive(Debug, Clone)]
pub struct CatalogClearedEvent(pub usize);
impl Event for CatalogClearedEvent {}

/// Published after a successful hydration, snapshot- or remote-sourced.
#[derive(Debug, Clone)]
pub struct CatalogHydratedEvent(pub HydrateOutcome);
impl Event for CatalogHydratedEvent {}
