//! Roller coaster queues
//!
//! Queues are plain `Vec<String>` owned by the caller. Every operation first
//! checks that the queue holds only non-empty names.

use thiserror::Error;

/// Queue errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("person name must not be empty")]
    EmptyName,
    #[error("queue contains an empty name at position {0}")]
    InvalidQueue(usize),
    #[error("{0} is not in the queue")]
    NotInQueue(String),
    #[error("queue must contain at least one person")]
    EmptyQueue,
    #[error("ticket type must be 0 (normal) or 1 (express), found {0}")]
    InvalidTicket(u8),
}

/// Ticket bought by a visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketType {
    Normal,
    Express,
}

impl TryFrom<u8> for TicketType {
    type Error = QueueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Express),
            other => Err(QueueError::InvalidTicket(other)),
        }
    }
}

fn validate_name(name: &str) -> Result<(), QueueError> {
    if name.is_empty() {
        return Err(QueueError::EmptyName);
    }
    Ok(())
}

fn validate_queue(queue: &[String]) -> Result<(), QueueError> {
    match queue.iter().position(String::is_empty) {
        Some(index) => Err(QueueError::InvalidQueue(index)),
        None => Ok(()),
    }
}

/// Append `name` to the queue matching the ticket and return that queue
pub fn add_me_to_the_queue<'q>(
    express_queue: &'q mut Vec<String>,
    normal_queue: &'q mut Vec<String>,
    ticket: TicketType,
    name: &str,
) -> Result<&'q [String], QueueError> {
    validate_name(name)?;
    validate_queue(express_queue)?;
    validate_queue(normal_queue)?;

    let queue = match ticket {
        TicketType::Express => express_queue,
        TicketType::Normal => normal_queue,
    };
    queue.push(name.to_string());
    Ok(queue.as_slice())
}

/// Position of the first person called `name`
pub fn find_my_friend(queue: &[String], name: &str) -> Result<Option<usize>, QueueError> {
    validate_name(name)?;
    validate_queue(queue)?;
    Ok(queue.iter().position(|person| person == name))
}

/// Insert `name` at `index`; an index past the end appends
pub fn add_me_with_my_friends(
    queue: &mut Vec<String>,
    index: usize,
    name: &str,
) -> Result<(), QueueError> {
    validate_name(name)?;
    validate_queue(queue)?;
    queue.insert(index.min(queue.len()), name.to_string());
    Ok(())
}

/// Remove the first person called `name`
pub fn remove_the_mean_person(queue: &mut Vec<String>, name: &str) -> Result<(), QueueError> {
    let index = find_my_friend(queue, name)?
        .ok_or_else(|| QueueError::NotInQueue(name.to_string()))?;
    queue.remove(index);
    Ok(())
}

/// Number of people called `name`
pub fn how_many_namefellows(queue: &[String], name: &str) -> Result<usize, QueueError> {
    validate_name(name)?;
    validate_queue(queue)?;
    Ok(queue.iter().filter(|person| *person == name).count())
}

/// Remove and return the person at the back of the queue
pub fn remove_the_last_person(queue: &mut Vec<String>) -> Result<String, QueueError> {
    validate_queue(queue)?;
    queue.pop().ok_or(QueueError::EmptyQueue)
}

/// Alphabetically sorted copy of the queue
pub fn sorted_names(queue: &[String]) -> Result<Vec<String>, QueueError> {
    validate_queue(queue)?;
    let mut names = queue.to_vec();
    names.sort();
    Ok(names)
}
