use rand::Rng;

const SESSION_PREFIX: &str = "session_";
const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a session id of the form `session_<epoch-ms>_<base36>`.
pub fn generate_session_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect();

    format!("{SESSION_PREFIX}{millis}_{suffix}")
}

/// Whether `value` has the `session_<digits>_<alphanumeric>` shape.
pub fn is_session_id(value: &str) -> bool {
    let Some(rest) = value.strip_prefix(SESSION_PREFIX) else {
        return false;
    };
    let Some((millis, suffix)) = rest.split_once('_') else {
        return false;
    };

    !millis.is_empty()
        && millis.chars().all(|c| c.is_ascii_digit())
        && !suffix.is_empty()
        && suffix.chars().all(|c| c.is_ascii_alphanumeric())
}
