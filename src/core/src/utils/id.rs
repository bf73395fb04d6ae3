const ID_LENGTH: usize = 8;
const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub struct IdUtils;

impl IdUtils {
    /// Random 8-character lowercase base36 identifier
    pub fn generate() -> String {
        let mut seed = rand::random::<u64>();

        (0..ID_LENGTH)
            .map(|_| {
                let digit = (seed % 36) as usize;
                seed /= 36;
                ID_ALPHABET[digit] as char
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let id = IdUtils::generate();

        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generated_ids_differ() {
        let ids: std::collections::HashSet<String> = (0..100).map(|_| IdUtils::generate()).collect();
        assert!(ids.len() > 95);
    }
}
