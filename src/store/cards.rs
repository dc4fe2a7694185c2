//! Card store
//!
//! Ordered in-memory collection of product cards. Order is insertion order;
//! every mutation replaces or removes whole cards by id. Audit logging and
//! sale coordination live in the services layer, not here.

use super::models::{CardDraft, ProductCard};
use crate::error::{AppError, Result};
use chrono::Utc;

/// Ordered collection of product cards
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<ProductCard>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All cards in insertion order
    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by id
    pub fn get(&self, id: u32) -> Option<&ProductCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Insert a new card: the store assigns the id (max existing id + 1)
    /// and stamps the creation time
    pub fn insert(&mut self, draft: CardDraft) -> &ProductCard {
        let id = self.next_id();
        let card = ProductCard {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            price: draft.price,
            quantity: draft.quantity,
            created_at: Utc::now(),
            image: draft.image,
        };

        self.cards.push(card);
        tracing::debug!("Inserted card: {}", id);

        // Just pushed, so the last element is the new card
        &self.cards[self.cards.len() - 1]
    }

    /// Replace a card wholesale by id, preserving its position and its
    /// original creation time (`created_at` is immutable). Returns the
    /// previous version alongside the stored one.
    pub fn replace(&mut self, card: ProductCard) -> Result<(ProductCard, &ProductCard)> {
        let slot = self
            .cards
            .iter_mut()
            .find(|existing| existing.id == card.id)
            .ok_or(AppError::CardNotFound(card.id))?;

        let replacement = ProductCard {
            created_at: slot.created_at,
            ..card
        };
        let old = std::mem::replace(slot, replacement);

        tracing::debug!("Replaced card: {}", old.id);
        Ok((old, slot))
    }

    /// Remove a card permanently
    pub fn remove(&mut self, id: u32) -> Result<ProductCard> {
        let index = self
            .cards
            .iter()
            .position(|card| card.id == id)
            .ok_or(AppError::CardNotFound(id))?;

        let card = self.cards.remove(index);
        tracing::debug!("Removed card: {}", id);
        Ok(card)
    }

    /// Attach, replace, or remove a card's image
    pub fn set_image(&mut self, id: u32, image: Option<String>) -> Result<()> {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or(AppError::CardNotFound(id))?;

        card.image = image;
        Ok(())
    }

    /// Decrement a card's quantity by one. Refuses when the card is already
    /// out of stock, so quantity can never go negative.
    pub fn decrement_quantity(&mut self, id: u32) -> Result<u32> {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or(AppError::CardNotFound(id))?;

        if card.quantity == 0 {
            return Err(AppError::OutOfStock(id));
        }

        card.quantity -= 1;
        Ok(card.quantity)
    }

    fn next_id(&self) -> u32 {
        self.cards.iter().map(|card| card.id).max().unwrap_or(0) + 1
    }
}
