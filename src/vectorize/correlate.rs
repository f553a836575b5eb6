use crate::errors::CorrelationError;

/// Reorders the payloads of one minibatch response by correlation id.
///
/// `entries` may arrive in any order. The id set must be exactly
/// `0..expected_len`; on success the payloads come back ordered by id.
pub fn correlate<P>(
    expected_len: usize,
    entries: impl IntoIterator<Item = (usize, P)>,
) -> Result<Vec<P>, CorrelationError> {
    let mut slots: Vec<Option<P>> = std::iter::repeat_with(|| None).take(expected_len).collect();

    for (id, payload) in entries {
        let slot = slots
            .get_mut(id)
            .ok_or(CorrelationError::UnexpectedId { id, expected_len })?;
        if slot.is_some() {
            return Err(CorrelationError::DuplicateId { id });
        }
        *slot = Some(payload);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(id, slot)| slot.ok_or(CorrelationError::MissingId { id, expected_len }))
        .collect()
}
