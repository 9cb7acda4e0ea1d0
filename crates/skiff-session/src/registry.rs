//! Owner of every open client.
//!
//! Clients live in an index-addressed slot arena. Handles carry the slot's
//! generation so a handle to a closed client never reaches its successor.

use tracing::{debug, info};

use crate::client::{Client, ClientHandle};
use crate::engine::{PageView, WindowSurface};

/// Result of [`ClientRegistry::close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed,
    /// The registry is now empty; shutdown has been signalled.
    LastClosed,
    /// The handle was stale; nothing happened.
    AlreadyClosed,
}

struct Slot<W, V> {
    generation: u32,
    client: Option<Client<W, V>>,
}

pub struct ClientRegistry<W, V> {
    slots: Vec<Slot<W, V>>,
    free: Vec<u32>,
    /// Most recently opened first.
    order: Vec<ClientHandle>,
    shutdown: bool,
}

impl<W: WindowSurface, V: PageView> ClientRegistry<W, V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
            shutdown: false,
        }
    }

    /// Take ownership of a client and put it at the front of the order.
    pub fn insert(&mut self, client: Client<W, V>) -> ClientHandle {
        let handle = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.client = Some(client);
                ClientHandle {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    client: Some(client),
                });
                ClientHandle {
                    index,
                    generation: 0,
                }
            }
        };
        self.order.insert(0, handle);
        handle
    }

    /// Stop loading, tear down view and window, and drop the client.
    ///
    /// Closing the last client signals shutdown, exactly once. A stale
    /// handle is ignored.
    pub fn close(&mut self, handle: ClientHandle) -> CloseOutcome {
        let Some(mut client) = self.take(handle) else {
            debug!(?handle, "close on stale handle ignored");
            return CloseOutcome::AlreadyClosed;
        };

        let id = client.id();
        if let Err(e) = client.view.stop_loading() {
            debug!(window = id, "stop before close failed: {e}");
        }
        client.view.close();
        client.window.destroy();
        debug!(window = id, remaining = self.order.len(), "client closed");

        if self.order.is_empty() && !self.shutdown {
            self.shutdown = true;
            info!("last window closed, shutting down");
            CloseOutcome::LastClosed
        } else {
            CloseOutcome::Closed
        }
    }

    /// Close every client, front to back.
    pub fn close_all(&mut self) {
        for handle in self.order.clone() {
            self.close(handle);
        }
    }

    fn take(&mut self, handle: ClientHandle) -> Option<Client<W, V>> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let client = slot.client.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.order.retain(|h| *h != handle);
        Some(client)
    }

    pub fn get(&self, handle: ClientHandle) -> Option<&Client<W, V>> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.client.as_ref()
    }

    pub fn get_mut(&mut self, handle: ClientHandle) -> Option<&mut Client<W, V>> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.client.as_mut()
    }

    /// Handle of the client whose window has `id`.
    pub fn find_by_window(&self, id: u64) -> Option<ClientHandle> {
        self.order
            .iter()
            .copied()
            .find(|h| self.get(*h).is_some_and(|c| c.id() == id))
    }

    /// Handles, most recently opened first.
    pub fn handles(&self) -> Vec<ClientHandle> {
        self.order.clone()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn shutdown_signalled(&self) -> bool {
        self.shutdown
    }
}

impl<W: WindowSurface, V: PageView> Default for ClientRegistry<W, V> {
    fn default() -> Self {
        Self::new()
    }
}
