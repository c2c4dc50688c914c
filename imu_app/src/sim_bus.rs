//! Simulated bus responder for tests: per-address register memory, an event
//! log of every bus call, and fault injection.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::linux_i2c::BusNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Select(u8),
    Write(u8, Vec<u8>),
    Read(u8, usize),
}

#[derive(Default)]
pub struct SimBus {
    regs: HashMap<(u8, u8), u8>,
    selected: Option<u8>,
    pointer: u8,
    reads: usize,
    pub events: Vec<Event>,
    bad_select: Option<u8>,
    short_write: Option<(u8, u8)>,
    short_read: Option<(u8, u8)>,
    stop_after_reads: Option<(usize, Arc<AtomicBool>)>,
}

impl SimBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reg(mut self, address: u8, reg: u8, value: u8) -> Self {
        self.regs.insert((address, reg), value);
        self
    }

    pub fn with_word(self, address: u8, low_reg: u8, value: i16) -> Self {
        let [lo, hi] = value.to_le_bytes();
        self.with_reg(address, low_reg, lo)
            .with_reg(address, low_reg + 1, hi)
    }

    pub fn fail_select(mut self, address: u8) -> Self {
        self.bad_select = Some(address);
        self
    }

    /// Any write to `address` starting with `reg` moves one byte less.
    pub fn short_write_at(mut self, address: u8, reg: u8) -> Self {
        self.short_write = Some((address, reg));
        self
    }

    /// Reads from `address` while the register pointer is `reg` return nothing.
    pub fn short_read_at(mut self, address: u8, reg: u8) -> Self {
        self.short_read = Some((address, reg));
        self
    }

    /// Clears `flag` once `reads` successful reads have completed.
    pub fn stop_after_reads(mut self, reads: usize, flag: Arc<AtomicBool>) -> Self {
        self.stop_after_reads = Some((reads, flag));
        self
    }

    pub fn reg(&self, address: u8, reg: u8) -> u8 {
        self.regs.get(&(address, reg)).copied().unwrap_or(0)
    }

    /// Every two-byte register write as (address, register, value).
    pub fn register_writes(&self) -> Vec<(u8, u8, u8)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Write(address, bytes) if bytes.len() == 2 => Some((*address, bytes[0], bytes[1])),
                _ => None,
            })
            .collect()
    }

    fn current(&self) -> io::Result<u8> {
        self.selected
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no device selected"))
    }
}

impl BusNode for SimBus {
    fn select(&mut self, address: u8) -> io::Result<()> {
        self.events.push(Event::Select(address));
        if self.bad_select == Some(address) {
            self.selected = None;
            return Err(io::Error::new(io::ErrorKind::ResourceBusy, "device or resource busy"));
        }
        self.selected = Some(address);
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        let address = self.current()?;
        self.events.push(Event::Write(address, bytes.to_vec()));
        let Some(&reg) = bytes.first() else {
            return Ok(0);
        };
        self.pointer = reg;
        if self.short_write == Some((address, reg)) {
            return Ok(bytes.len() - 1);
        }
        for (offset, &value) in bytes[1..].iter().enumerate() {
            self.regs.insert((address, reg.wrapping_add(offset as u8)), value);
        }
        Ok(bytes.len())
    }

    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        let address = self.current()?;
        self.events.push(Event::Read(address, buffer.len()));
        if self.short_read == Some((address, self.pointer)) {
            return Ok(0);
        }
        for b in buffer.iter_mut() {
            *b = self.reg(address, self.pointer);
            self.pointer = self.pointer.wrapping_add(1);
        }
        self.reads += 1;
        if let Some((limit, flag)) = &self.stop_after_reads {
            if self.reads >= *limit {
                flag.store(false, Ordering::SeqCst);
            }
        }
        Ok(buffer.len())
    }
}
