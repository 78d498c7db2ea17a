use appreg_state_space::StateSpace;
use rocksdb::{DBCompressionType, Options, SliceTransform, WriteOptions};
use tap::Tap;

/// Every key starts with the 32-byte id of the owning account.
pub const ACCOUNT_PREFIX_LEN: usize = 32;

/// Tuning for the RocksDB backend.
///
/// The registry commits one small batch per transaction from a single writer and reads by exact
/// key. Values are a few fixed-width integers.
pub trait Config: Send + Sync + 'static {
    fn db_opts() -> Options {
        Options::default().tap_mut(|o| {
            // flushes and compactions are the only background work
            o.set_max_background_jobs(num_cpus::get().clamp(2, 4) as i32);
            o.set_enable_pipelined_write(false);
            o.set_paranoid_checks(true);
        })
    }

    fn write_opts() -> WriteOptions {
        WriteOptions::default().tap_mut(|o| {
            o.set_sync(false);
            o.disable_wal(false); // accepted transactions survive a crash through WAL replay
        })
    }

    fn cf_opts(state_space: StateSpace) -> Options {
        Options::default().tap_mut(|o| {
            o.set_compression_type(DBCompressionType::None);
            match state_space {
                // one counter per account or application, only ever read by exact key
                StateSpace::AppLen | StateSpace::ParamLen => o.optimize_for_point_lookup(8),
                // dense arrays grouped behind the account id
                StateSpace::App | StateSpace::Param => {
                    o.set_prefix_extractor(SliceTransform::create_fixed_prefix(ACCOUNT_PREFIX_LEN));
                    o.set_memtable_prefix_bloom_ratio(0.1);
                }
            }
        })
    }
}

pub struct DefaultConfig;
impl Config for DefaultConfig {}
