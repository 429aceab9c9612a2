use strsim::levenshtein;

/// Closest candidate to an unknown function name, if any is near enough.
///
/// Near enough means an edit distance of at most a third of the name's
/// length, and never less than one. Ties go to the earliest candidate.
pub fn did_you_mean<'a>(
    name: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let name = name.to_lowercase();
    let threshold = (name.chars().count() / 3).max(1);

    candidates
        .into_iter()
        .map(|candidate| (levenshtein(&name, candidate), candidate))
        .filter(|&(distance, _)| distance <= threshold)
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, candidate)| candidate)
}
