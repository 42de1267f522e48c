use rand::{distributions::Alphanumeric, Rng};

/// Length of generated todo ids
pub const ID_LEN: usize = 32;

/// Generate a random string of `len` characters drawn from `[0-9a-zA-Z]`
pub fn random_string(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
