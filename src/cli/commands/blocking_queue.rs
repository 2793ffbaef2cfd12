use anyhow::Result;
use clap::Args;

use super::generate::{self, RunOptions};
use crate::cli::Output;
use crate::exercises::{BlockingQueueAxes, Generator};
use crate::range::RangeDescriptor;

#[derive(Args)]
pub struct BlockingQueueArgs {
    /// Queue capacities as powers: base^start .. base^end
    #[arg(short = 'c', long = "capacity-log-range", value_name = "base,start,end,step",
          value_parser = RangeDescriptor::parse_logarithmic)]
    pub capacity: RangeDescriptor,

    /// Reader thread counts
    #[arg(short = 'r', long = "readers-range", value_name = "start,end,step",
          value_parser = RangeDescriptor::parse_linear)]
    pub readers: RangeDescriptor,

    /// Writer thread counts
    #[arg(short = 'w', long = "writers-range", value_name = "start,end,step",
          value_parser = RangeDescriptor::parse_linear)]
    pub writers: RangeDescriptor,

    /// Item counts as powers: base^start .. base^end
    #[arg(short = 'i', long = "items-log-range", value_name = "base,start,end,step",
          value_parser = RangeDescriptor::parse_logarithmic)]
    pub items: RangeDescriptor,
}

impl From<BlockingQueueArgs> for BlockingQueueAxes {
    fn from(args: BlockingQueueArgs) -> Self {
        BlockingQueueAxes {
            capacity: args.capacity,
            readers: args.readers,
            writers: args.writers,
            items: args.items,
        }
    }
}

pub fn execute(args: BlockingQueueArgs, options: &RunOptions, output: &Output) -> Result<()> {
    let axes = BlockingQueueAxes::from(args);
    tracing::debug!("Blocking queue axes: {:?}", axes);

    let generator = Generator::blocking_queue(&axes)?;
    generate::execute(&generator, &options.directory, options, output)?;
    Ok(())
}
