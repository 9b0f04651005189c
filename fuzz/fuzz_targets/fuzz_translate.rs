#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use bfc::{BracketPolicy, EofBehavior, Indent, Scanner, TranslatorOptions, structure, translate};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, RngCore, SeedableRng};

const HEADER: usize = 1; // option flags

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Byte pool for generated programs: every command symbol plus a little
/// comment text, so the mutator spends most of its time on structure.
static POOL: &[u8] = b"><+-.,[][]  \nx\0";

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8);
        let len = with_rng(|rng| rng.random_range(HEADER..=max_size.min(512).max(HEADER)));
        for byte in &mut data[HEADER..len] {
            *byte = with_rng(|rng| POOL[rng.random_range(0..POOL.len())]);
        }
        len
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
struct Flags {
    spaces: u8,
    eof: u8,
    permissive: bool,
}

fn options(header: u8) -> TranslatorOptions {
    let flags = Flags::arbitrary(&mut Unstructured::new(&[header, header >> 2, header >> 4]))
        .unwrap_or(Flags {
            spaces: 0,
            eof: 0,
            permissive: false,
        });
    TranslatorOptions {
        indent: Indent::spaces(flags.spaces % 4),
        eof: match flags.eof % 3 {
            0 => EofBehavior::Unchanged,
            1 => EofBehavior::Zero,
            _ => EofBehavior::Max,
        },
        brackets: if flags.permissive {
            BracketPolicy::Permissive
        } else {
            BracketPolicy::Checked
        },
        ..Default::default()
    }
}

fn run(data: &[u8]) {
    let Some((&header, program)) = data.split_first() else {
        return;
    };
    let options = options(header);

    let mut scanner = Scanner::new(program);
    let balanced = structure::check(&scanner).is_ok();
    let mut out = Vec::new();
    let result = translate(&mut scanner, &mut out, options);

    match (options.brackets, result) {
        (BracketPolicy::Checked, Ok(_)) => {
            assert!(balanced);
            let text = String::from_utf8(out).expect("generated C is ASCII");
            let opens = text.matches("while (buffer[p]) {").count();
            assert_eq!(opens, program.iter().take_while(|&&b| b != 0).filter(|&&b| b == b'[').count());
        }
        (BracketPolicy::Checked, Err(_)) => {
            assert!(!balanced);
            assert!(out.is_empty());
        }
        (BracketPolicy::Permissive, result) => {
            result.expect("permissive mode accepts any input");
            assert!(out.ends_with(b"return 0;\n}\n"));
        }
    }
    assert!(scanner.next_command().is_eof() || !balanced);
}

fuzz_target!(|data: &[u8]| run(data));
