//! # Decoder Properties
//!
//! Decoding is total and unambiguous over the whole 16-bit space, and every
//! operand field lands where the encoding puts it.

use proptest::prelude::*;
use xm23_core::common::Width;
use xm23_core::isa::decode::{ArithOperands, ByteOperands, IndexedOperands, RelativeOperands};
use xm23_core::isa::opcodes::*;
use xm23_core::isa::{Decoded, InstructionClass, classify, decode};

/// Every class pattern with the mask it is tested under.
const PATTERNS: [(u16, u16, InstructionClass); 7] = [
    (NIBBLE_CLASS_MASK, CLASS_BL, InstructionClass::BranchAndLink),
    (TRIAD_CLASS_MASK, CLASS_BRANCH, InstructionClass::Branch),
    (TRIAD_CLASS_MASK, CLASS_ARITHMETIC, InstructionClass::Arithmetic),
    (TRIAD_CLASS_MASK, CLASS_LD_ST_MOVL_MOVLZ, InstructionClass::LdStMovlMovlz),
    (NIBBLE_CLASS_MASK, CLASS_MOVH, InstructionClass::MoveHigh),
    (PAIR_CLASS_MASK, CLASS_LDR, InstructionClass::LoadRelative),
    (PAIR_CLASS_MASK, CLASS_STR, InstructionClass::StoreRelative),
];

#[test]
fn every_word_matches_exactly_one_class() {
    for word in 0..=u16::MAX {
        let matches: Vec<InstructionClass> = PATTERNS
            .iter()
            .filter(|(mask, value, _)| word & mask == *value)
            .map(|(_, _, class)| *class)
            .collect();
        assert_eq!(matches.len(), 1, "word {:#06x} matched {:?}", word, matches);
        assert_eq!(classify(word), matches[0], "word {:#06x}", word);
        assert_eq!(decode(word).class(), matches[0], "word {:#06x}", word);
    }
}

#[test]
fn bl_example() {
    assert_eq!(decode(0x1004), Decoded::BranchAndLink { offset: 4 });
    assert_eq!(decode(0x1FFF), Decoded::BranchAndLink { offset: -1 });
    assert_eq!(decode(0x1800), Decoded::BranchAndLink { offset: -2048 });
}

#[test]
fn branch_offsets_sign_extend_from_ten_bits() {
    assert_eq!(
        decode(0x2000 | (cond::NE as u16) << 10 | 0x03FE),
        Decoded::Branch {
            condition: cond::NE,
            offset: -2,
        }
    );
    assert_eq!(
        decode(0x3DFF),
        Decoded::Branch {
            condition: cond::AL,
            offset: 511,
        }
    );
}

#[test]
fn arithmetic_fields() {
    // add.b #1,r2
    assert_eq!(
        decode(0x40CA),
        Decoded::Arithmetic {
            opcode: arith::ADD,
            operands: ArithOperands {
                constant: true,
                width: Width::Byte,
                src: 1,
                dst: 2,
            },
        }
    );
}

#[test]
fn ld_st_subtypes() {
    let ops = IndexedOperands {
        pre: true,
        dec: true,
        inc: false,
        width: Width::Word,
        src: 5,
        dst: 0,
    };
    assert_eq!(decode(0x6628), Decoded::Load(ops));
    assert_eq!(decode(0x6E28), Decoded::Store(ops));
    assert_eq!(
        decode(0x7008),
        Decoded::MoveLow(ByteOperands { byte: 0x01, dst: 0 })
    );
    assert_eq!(
        decode(0x7FFB),
        Decoded::MoveLowZero(ByteOperands { byte: 0xFF, dst: 3 })
    );
}

#[test]
fn relative_offsets_sign_extend_from_seven_bits() {
    let expected = RelativeOperands {
        offset: -64,
        width: Width::Byte,
        src: 1,
        dst: 2,
    };
    assert_eq!(decode(0xA04A), Decoded::LoadRelative(expected));
    assert_eq!(decode(0xE04A), Decoded::StoreRelative(expected));

    let top = RelativeOperands {
        offset: 63,
        width: Width::Word,
        src: 0,
        dst: 0,
    };
    assert_eq!(decode(0x9F80), Decoded::LoadRelative(top));
}

#[test]
fn zero_word_is_movh() {
    assert_eq!(
        decode(0x0000),
        Decoded::MoveHigh(ByteOperands { byte: 0, dst: 0 })
    );
}

proptest! {
    #[test]
    fn register_fields_survive_decode(
        opcode in 0u8..32,
        constant: bool,
        byte: bool,
        src in 0u16..8,
        dst in 0u16..8,
    ) {
        let word = 0x4000
            | (opcode as u16) << 8
            | (constant as u16) << 7
            | (byte as u16) << 6
            | src << 3
            | dst;
        let Decoded::Arithmetic { opcode: got, operands } = decode(word) else {
            panic!("{:#06x} did not decode as arithmetic", word);
        };
        prop_assert_eq!(got, opcode);
        prop_assert_eq!(operands.constant, constant);
        prop_assert_eq!(operands.width == Width::Byte, byte);
        prop_assert_eq!(operands.src, src as usize);
        prop_assert_eq!(operands.dst, dst as usize);
    }

    #[test]
    fn movh_byte_survives_decode(value: u8, dst in 0u16..8) {
        let word = (value as u16) << 3 | dst;
        let Decoded::MoveHigh(ops) = decode(word) else {
            panic!("{:#06x} did not decode as movh", word);
        };
        prop_assert_eq!(ops.byte, value);
        prop_assert_eq!(ops.dst, dst as usize);
    }
}
