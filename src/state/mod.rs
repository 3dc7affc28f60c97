mod cart;
mod persistence;
mod session;

pub use cart::{Cart, CartEntry};
pub use persistence::{load_catalog, load_session, save_session};
pub use session::{SavedCartEntry, Session, SessionFile};
