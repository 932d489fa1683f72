use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A trader with a name and a current city.
///
/// Names are not unique; two traders are the same entity exactly when
/// both name and city match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trader {
    name: String,
    city: String,
}

impl Trader {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }
}

/// Shared handle to a trader record.
///
/// Cloning the handle shares the record: several transactions may hold
/// clones of one handle, and a city change made through any of them is
/// observed by all. Equality compares the underlying name and city,
/// never the pointer.
#[derive(Debug, Clone)]
pub struct TraderRef(Rc<RefCell<Trader>>);

impl TraderRef {
    pub fn new(trader: Trader) -> Self {
        Self(Rc::new(RefCell::new(trader)))
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn city(&self) -> String {
        self.0.borrow().city.clone()
    }

    /// True when the trader is currently based in the given city.
    pub fn is_in(&self, city: &str) -> bool {
        self.0.borrow().city == city
    }

    pub fn set_city(&self, city: impl Into<String>) {
        self.0.borrow_mut().set_city(city);
    }
}

impl PartialEq for TraderRef {
    fn eq(&self, other: &Self) -> bool {
        *self.0.borrow() == *other.0.borrow()
    }
}

impl Eq for TraderRef {}

impl From<Trader> for TraderRef {
    fn from(trader: Trader) -> Self {
        Self::new(trader)
    }
}

impl fmt::Display for TraderRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let trader = self.0.borrow();
        write!(f, "{} ({})", trader.name, trader.city)
    }
}
