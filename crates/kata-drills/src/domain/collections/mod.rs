//! Container drills
//!
//! Lists, queues, ordered counters, sets and small records. Functions that
//! update a collection take the caller's container by `&mut`.

pub mod alien;
pub mod card_games;
pub mod cater_waiter;
pub mod coaster_queue;
pub mod grades;
pub mod inventory;
pub mod locomotive;
pub mod plane_tickets;
pub mod shopping_cart;
pub mod treasure_hunt;
