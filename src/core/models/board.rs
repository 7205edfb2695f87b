use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::BoardError;

pub const ITEM_PREFIX: &str = "item-";
pub const CONTAINER_PREFIX: &str = "container-";

/// Kind of a draggable entity, read from its id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Item,
    Container,
}

impl EntityKind {
    /// The prefix is the only thing that tells items and containers apart.
    pub fn of(id: &str) -> Option<EntityKind> {
        if id.starts_with(ITEM_PREFIX) {
            Some(EntityKind::Item)
        } else if id.starts_with(CONTAINER_PREFIX) {
            Some(EntityKind::Container)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: String,
    pub title: String,
}

impl Item {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: format!("{}{}", ITEM_PREFIX, Uuid::new_v4()),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Container {
    pub id: String,
    pub title: String,
    pub items: Vec<Item>,
}

impl Container {
    pub fn new(title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id: format!("{}{}", CONTAINER_PREFIX, Uuid::new_v4()),
            title: title.into(),
            items,
        }
    }

    pub fn item_index(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }
}

/// Ordered containers, each with its ordered items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Board {
    pub containers: Vec<Container>,
}

/// Where an item currently sits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLocation {
    pub container: usize,
    pub item: usize,
}

impl Board {
    pub fn new(containers: Vec<Container>) -> Self {
        Self { containers }
    }

    /// Two containers with one item each, all with fresh ids.
    pub fn seeded() -> Self {
        Self::new(vec![
            Container::new("Container 1", vec![Item::new("Item 1")]),
            Container::new("Container 2", vec![Item::new("Item 2")]),
        ])
    }

    pub fn item_count(&self) -> usize {
        self.containers.iter().map(|c| c.items.len()).sum()
    }

    // Lookups

    pub fn find_container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn find_container_of_item(&self, item_id: &str) -> Option<&Container> {
        self.containers
            .iter()
            .find(|c| c.items.iter().any(|item| item.id == item_id))
    }

    pub fn container_index(&self, id: &str) -> Result<usize, BoardError> {
        self.containers
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| BoardError::UnknownContainer(id.to_string()))
    }

    pub fn locate_item(&self, item_id: &str) -> Result<ItemLocation, BoardError> {
        self.containers
            .iter()
            .enumerate()
            .find_map(|(container, c)| {
                c.item_index(item_id)
                    .map(|item| ItemLocation { container, item })
            })
            .ok_or_else(|| BoardError::UnknownItem(item_id.to_string()))
    }

    pub fn item_title(&self, id: &str) -> String {
        self.find_container_of_item(id)
            .and_then(|c| c.items.iter().find(|item| item.id == id))
            .map(|item| item.title.clone())
            .unwrap_or_default()
    }

    pub fn container_title(&self, id: &str) -> String {
        self.find_container(id)
            .map(|c| c.title.clone())
            .unwrap_or_default()
    }

    pub fn container_items(&self, id: &str) -> &[Item] {
        self.find_container(id)
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }

    // Mutations. Each one validates first, so a failed call leaves the board untouched.

    pub fn move_item_within_container(
        &mut self,
        container_index: usize,
        from_index: usize,
        to_index: usize,
    ) -> Result<(), BoardError> {
        let len = self.containers.len();
        let container = self
            .containers
            .get_mut(container_index)
            .ok_or(BoardError::ContainerIndexOutOfRange { index: container_index, len })?;
        let item_len = container.items.len();
        for index in [from_index, to_index] {
            if index >= item_len {
                return Err(BoardError::ItemIndexOutOfRange {
                    container: container_index,
                    index,
                    len: item_len,
                });
            }
        }
        array_move(&mut container.items, from_index, to_index);
        Ok(())
    }

    /// Moves an item into another container. `dst_item_index` of `None`, or one
    /// past the end of the destination, appends.
    pub fn move_item_across_containers(
        &mut self,
        src_container_index: usize,
        src_item_index: usize,
        dst_container_index: usize,
        dst_item_index: Option<usize>,
    ) -> Result<(), BoardError> {
        let len = self.containers.len();
        for index in [src_container_index, dst_container_index] {
            if index >= len {
                return Err(BoardError::ContainerIndexOutOfRange { index, len });
            }
        }
        let src_len = self.containers[src_container_index].items.len();
        if src_item_index >= src_len {
            return Err(BoardError::ItemIndexOutOfRange {
                container: src_container_index,
                index: src_item_index,
                len: src_len,
            });
        }

        let item = self.containers[src_container_index]
            .items
            .remove(src_item_index);
        let dst = &mut self.containers[dst_container_index].items;
        let at = dst_item_index.map_or(dst.len(), |i| i.min(dst.len()));
        dst.insert(at, item);
        Ok(())
    }

    pub fn move_container(&mut self, from_index: usize, to_index: usize) -> Result<(), BoardError> {
        let len = self.containers.len();
        for index in [from_index, to_index] {
            if index >= len {
                return Err(BoardError::ContainerIndexOutOfRange { index, len });
            }
        }
        array_move(&mut self.containers, from_index, to_index);
        Ok(())
    }
}

/// Removes the element at `from` and reinserts it at `to`, shifting what lies between.
fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let moved = items.remove(from);
    items.insert(to.min(items.len()), moved);
}
