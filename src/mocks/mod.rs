// Mock backends, only compiled during tests.

pub mod mock_sysfs;
