use xm23_core::isa::opcodes::ldst;

/// `BL` with a 12-bit word offset.
pub fn bl(offset: i16) -> u16 {
    0x1000 | (offset as u16 & 0x0FFF)
}

/// Conditional branch with a 10-bit word offset.
pub fn branch(condition: u8, offset: i16) -> u16 {
    0x2000 | ((condition as u16 & 0x7) << 10) | (offset as u16 & 0x03FF)
}

/// Fluent builder for arithmetic-class words.
pub struct ArithBuilder {
    opcode: u8,
    constant: bool,
    byte: bool,
    src: u16,
    dst: u16,
}

impl ArithBuilder {
    pub fn new(opcode: u8) -> Self {
        Self {
            opcode,
            constant: false,
            byte: false,
            src: 0,
            dst: 0,
        }
    }

    /// Select `CON[src]` instead of register `src`.
    pub fn constant(mut self) -> Self {
        self.constant = true;
        self
    }

    pub fn byte(mut self) -> Self {
        self.byte = true;
        self
    }

    pub fn src(mut self, src: u16) -> Self {
        self.src = src;
        self
    }

    pub fn dst(mut self, dst: u16) -> Self {
        self.dst = dst;
        self
    }

    pub fn build(self) -> u16 {
        0x4000
            | ((self.opcode as u16 & 0x1F) << 8)
            | ((self.constant as u16) << 7)
            | ((self.byte as u16) << 6)
            | ((self.src & 0x7) << 3)
            | (self.dst & 0x7)
    }
}

/// Shorthand for a register-to-register word operation.
pub fn arith(opcode: u8, src: u16, dst: u16) -> u16 {
    ArithBuilder::new(opcode).src(src).dst(dst).build()
}

/// Addressing mode of an indexed access.
#[derive(Clone, Copy, Debug)]
pub struct Indexing {
    pub pre: bool,
    pub dec: bool,
    pub inc: bool,
}

impl Indexing {
    pub const PLAIN: Indexing = Indexing {
        pre: false,
        dec: false,
        inc: false,
    };
    pub const POST_INC: Indexing = Indexing {
        pre: false,
        dec: false,
        inc: true,
    };
    pub const PRE_DEC: Indexing = Indexing {
        pre: true,
        dec: true,
        inc: false,
    };
}

fn indexed(kind: u8, mode: Indexing, byte: bool, src: u16, dst: u16) -> u16 {
    0x6000
        | ((kind as u16) << 11)
        | ((mode.pre as u16) << 10)
        | ((mode.dec as u16) << 9)
        | ((mode.inc as u16) << 8)
        | ((byte as u16) << 6)
        | ((src & 0x7) << 3)
        | (dst & 0x7)
}

/// `LD`: pointer in `src`, data into `dst`.
pub fn ld(mode: Indexing, byte: bool, src: u16, dst: u16) -> u16 {
    indexed(ldst::LD, mode, byte, src, dst)
}

/// `ST`: data from `src`, pointer in `dst`.
pub fn st(mode: Indexing, byte: bool, src: u16, dst: u16) -> u16 {
    indexed(ldst::ST, mode, byte, src, dst)
}

pub fn movl(value: u8, dst: u16) -> u16 {
    0x6000 | ((ldst::MOVL as u16) << 11) | ((value as u16) << 3) | (dst & 0x7)
}

pub fn movlz(value: u8, dst: u16) -> u16 {
    0x6000 | ((ldst::MOVLZ as u16) << 11) | ((value as u16) << 3) | (dst & 0x7)
}

pub fn movh(value: u8, dst: u16) -> u16 {
    ((value as u16) << 3) | (dst & 0x7)
}

fn relative(base: u16, offset: i8, byte: bool, src: u16, dst: u16) -> u16 {
    base | ((offset as u16 & 0x7F) << 7) | ((byte as u16) << 6) | ((src & 0x7) << 3) | (dst & 0x7)
}

/// `LDR`: `dst <- mem[src + offset]`, offset in -64..=63.
pub fn ldr(offset: i8, byte: bool, src: u16, dst: u16) -> u16 {
    relative(0x8000, offset, byte, src, dst)
}

/// `STR`: `mem[dst + offset] <- src`, offset in -64..=63.
pub fn str_rel(offset: i8, byte: bool, src: u16, dst: u16) -> u16 {
    relative(0xC000, offset, byte, src, dst)
}
