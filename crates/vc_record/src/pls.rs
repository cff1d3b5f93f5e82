use alloc::vec::Vec;

use vc_reflect::ops::Struct;

use crate::{LoadError, Property, PropertyList, SaveError, load_struct, save_struct};

/// A value that loads itself from, and saves itself to, properties.
///
/// Every `#[derive(Reflect)]` struct implements it through the generic
/// engine. Other types implement it by hand to take full control, as
/// [`PropertyList`] does.
///
/// # Examples
///
/// ```
/// use vc_record::{LoadError, Property, PropertyLoadSaver, SaveError, Value};
///
/// /// Counts the properties it was loaded with.
/// #[derive(Default)]
/// struct Counter(usize);
///
/// impl PropertyLoadSaver for Counter {
///     fn load(&mut self, properties: Vec<Property>) -> Result<(), LoadError> {
///         self.0 += properties.len();
///         Ok(())
///     }
///
///     fn save(&self) -> Result<Vec<Property>, SaveError> {
///         let count = i64::try_from(self.0).map_err(|e| SaveError::Custom(e.to_string()))?;
///         Ok(vec![Property::new("count", Value::Int(count))])
///     }
/// }
///
/// let mut counter = Counter::default();
/// counter.load(vec![Property::new("a", true)]).unwrap();
/// assert_eq!(counter.save().unwrap()[0].value, Value::Int(1));
/// ```
pub trait PropertyLoadSaver {
    fn load(&mut self, properties: Vec<Property>) -> Result<(), LoadError>;

    fn save(&self) -> Result<Vec<Property>, SaveError>;
}

impl<T: Struct> PropertyLoadSaver for T {
    #[inline]
    fn load(&mut self, properties: Vec<Property>) -> Result<(), LoadError> {
        load_struct(self, &properties).map_err(LoadError::from)
    }

    #[inline]
    fn save(&self) -> Result<Vec<Property>, SaveError> {
        save_struct(self)
    }
}

impl PropertyLoadSaver for PropertyList {
    /// Appends the properties verbatim.
    fn load(&mut self, properties: Vec<Property>) -> Result<(), LoadError> {
        self.0.extend(properties);
        Ok(())
    }

    fn save(&self) -> Result<Vec<Property>, SaveError> {
        Ok(self.0.clone())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::Value;

    #[test]
    fn property_list_accumulates() {
        let mut list = PropertyList::new();
        list.load(vec![Property::new("a", 1_i64)]).unwrap();
        list.load(vec![Property::new("a", 2_i64)]).unwrap();

        assert_eq!(list.0.len(), 2);
        assert_eq!(list.get("a").unwrap().value, Value::Int(1));
        assert_eq!(list.save().unwrap(), list.0);
    }
}
