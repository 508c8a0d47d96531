// Benchmark configuration
// Defaults mirror the reference runs: 2048-bit keys, 100 iterations, message 12345

use crate::rsa::KeyGenConfig;

/// Configuration for the benchmark suites
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Timed calls per operation in the main suites
    pub iterations: usize,
    pub key_bits: u32,
    /// Integer message for the textbook path
    pub message: u64,
    /// Byte message for the library path
    pub library_message: Vec<u8>,
    pub key_sizes: Vec<u32>,
    /// Timed calls per entry in the key-size and message sweeps
    pub sweep_iterations: usize,
    pub message_sizes: Vec<u64>,
    pub keygen: KeyGenConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            key_bits: 2048,
            message: 12345,
            library_message: b"Hello, RSA!".to_vec(),
            key_sizes: vec![512, 1024, 2048],
            sweep_iterations: 50,
            message_sizes: vec![100, 1000, 10000, 100000],
            keygen: KeyGenConfig::default(),
        }
    }
}

impl BenchConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_key_bits(mut self, bits: u32) -> Self {
        self.key_bits = bits;
        self
    }

    pub fn with_message(mut self, message: u64) -> Self {
        self.message = message;
        self
    }

    pub fn with_library_message(mut self, message: &[u8]) -> Self {
        self.library_message = message.to_vec();
        self
    }

    pub fn with_key_sizes(mut self, sizes: Vec<u32>) -> Self {
        self.key_sizes = sizes;
        self
    }

    pub fn with_sweep_iterations(mut self, iterations: usize) -> Self {
        self.sweep_iterations = iterations;
        self
    }

    pub fn with_message_sizes(mut self, sizes: Vec<u64>) -> Self {
        self.message_sizes = sizes;
        self
    }

    pub fn with_keygen(mut self, keygen: KeyGenConfig) -> Self {
        self.keygen = keygen;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.iterations, 100);
        assert_eq!(config.key_bits, 2048);
        assert_eq!(config.message, 12345);
        assert_eq!(config.library_message, b"Hello, RSA!");
        assert_eq!(config.key_sizes, vec![512, 1024, 2048]);
        assert_eq!(config.sweep_iterations, 50);
    }

    #[test]
    fn test_builder_overrides() {
        let config = BenchConfig::default()
            .with_iterations(5)
            .with_key_bits(512)
            .with_message(42)
            .with_library_message(b"hi")
            .with_key_sizes(vec![64])
            .with_sweep_iterations(3)
            .with_message_sizes(vec![1, 2])
            .with_keygen(KeyGenConfig::default().with_max_attempts(2));

        assert_eq!(config.iterations, 5);
        assert_eq!(config.key_bits, 512);
        assert_eq!(config.message, 42);
        assert_eq!(config.library_message, b"hi");
        assert_eq!(config.key_sizes, vec![64]);
        assert_eq!(config.sweep_iterations, 3);
        assert_eq!(config.message_sizes, vec![1, 2]);
        assert_eq!(config.keygen.max_attempts, 2);
    }
}
