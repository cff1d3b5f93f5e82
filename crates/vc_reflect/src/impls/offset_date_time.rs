use time::OffsetDateTime;

crate::impl_reflect_opaque!(OffsetDateTime, zeroed = OffsetDateTime::UNIX_EPOCH);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;
    use time::macros::datetime;

    use crate::Reflect;
    use crate::info::Typed;
    use crate::ops::ReflectMut;

    #[test]
    fn opaque_time() {
        assert!(OffsetDateTime::type_info().is_opaque());

        let mut t = datetime!(2024-05-01 12:00 UTC);
        let ReflectMut::Opaque(value) = t.reflect_mut() else {
            panic!("time is opaque");
        };
        *value.downcast_mut::<OffsetDateTime>().unwrap() = OffsetDateTime::UNIX_EPOCH;
        assert_eq!(t, OffsetDateTime::UNIX_EPOCH);

        t = datetime!(2024-05-01 12:00 UTC);
        t.reset();
        assert_eq!(t.unix_timestamp(), 0);
    }
}
