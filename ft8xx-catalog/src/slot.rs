//! Logical address slots
//!
//! A slot names one memory region or register independently of which chip
//! defines it. The slot set is the union over all variants; a variant that
//! lacks a slot simply has no catalog entry for it.
//!
//! Slots are keyed by name, never by address. Where a newer variant reuses a
//! location for a different function, the two functions get distinct slots
//! (for example `REG_EHOST_TOUCH_ACK` occupies a word that FT81x leaves
//! reserved) and a name always carries the newest variant's meaning.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Declare a fieldless slot enum with its vendor symbol names
macro_rules! slot_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $slot:ident => $symbol:literal $(| $alias:literal)*, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $slot, )+
        }

        impl $name {
            /// Every slot of this kind, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$slot, )+ ];

            /// Number of slots of this kind
            pub const COUNT: usize = Self::ALL.len();

            /// Position within [`Self::ALL`]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Vendor symbol, e.g. `"REG_CMD_WRITE"`
            pub const fn symbol(self) -> &'static str {
                match self {
                    $( $name::$slot => $symbol, )+
                }
            }

            /// Look up a slot by its exact vendor symbol
            ///
            /// Alternate spellings used by some vendor headers are accepted
            /// too; [`symbol`](Self::symbol) always returns the canonical one.
            pub fn from_symbol(symbol: &str) -> Option<Self> {
                match symbol {
                    $( $symbol $(| $alias)* => Some($name::$slot), )+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbol())
            }
        }
    };
}

slot_enum! {
    /// Memory regions of the chip address space
    pub enum MemorySlot {
        /// General purpose graphics RAM start
        RamG => "RAM_G",
        /// Last byte of graphics RAM
        RamGEnd => "RAM_G_END",
        /// Chip ID bytes in ROM
        RomChipId => "ROM_CHIPID",
        /// Built-in font table
        RomFont => "ROM_FONT",
        /// Pointer to the font table
        RomFontAddr => "ROM_FONT_ADDR",
        /// Display list RAM
        RamDl => "RAM_DL",
        /// Palette RAM (FT800 only)
        RamPal => "RAM_PAL",
        /// Register file base
        Reg => "REG",
        /// Coprocessor command FIFO
        RamCmd => "RAM_CMD",
        /// External NOR flash base
        Flash => "FLASH",
        /// Last addressable byte of external flash
        FlashMax => "FLASH_MAX",
    }
}

slot_enum! {
    /// Control and status registers
    pub enum RegisterSlot {
        /// Chip identification, reads 0x7C
        Id => "REG_ID",
        /// Frame counter since reset
        Frames => "REG_FRAMES",
        /// Clock cycles since reset
        Clock => "REG_CLOCK",
        /// Main clock frequency in Hz
        Frequency => "REG_FREQUENCY",
        RenderMode => "REG_RENDERMODE",
        SnapY => "REG_SNAPY",
        Snapshot => "REG_SNAPSHOT",
        SnapFormat => "REG_SNAPFORMAT",
        /// Graphics, audio and touch engine reset control
        CpuReset => "REG_CPURESET",
        TapCrc => "REG_TAP_CRC",
        TapMask => "REG_TAP_MASK",

        // Display timing
        /// Horizontal total cycle count
        HCycle => "REG_HCYCLE",
        /// Horizontal display start offset
        HOffset => "REG_HOFFSET",
        /// Horizontal display pixel count
        HSize => "REG_HSIZE",
        /// Horizontal sync fall offset
        HSync0 => "REG_HSYNC0",
        /// Horizontal sync rise offset
        HSync1 => "REG_HSYNC1",
        /// Vertical total cycle count
        VCycle => "REG_VCYCLE",
        /// Vertical display start offset
        VOffset => "REG_VOFFSET",
        /// Vertical display line count
        VSize => "REG_VSIZE",
        /// Vertical sync fall offset
        VSync0 => "REG_VSYNC0",
        /// Vertical sync rise offset
        VSync1 => "REG_VSYNC1",
        /// Display list swap control
        DlSwap => "REG_DLSWAP",
        Rotate => "REG_ROTATE",
        OutBits => "REG_OUTBITS",
        Dither => "REG_DITHER",
        Swizzle => "REG_SWIZZLE",
        CSpread => "REG_CSPREAD",
        /// Pixel clock polarity
        PclkPol => "REG_PCLK_POL",
        /// Pixel clock divider, 0 disables output
        Pclk => "REG_PCLK",

        // Tag query
        TagX => "REG_TAG_X",
        TagY => "REG_TAG_Y",
        Tag => "REG_TAG",

        // Audio
        /// Sample playback volume
        VolPb => "REG_VOL_PB",
        /// Synthesizer volume
        VolSound => "REG_VOL_SOUND",
        /// Synthesizer effect select
        Sound => "REG_SOUND",
        /// Start the synthesizer effect
        Play => "REG_PLAY",

        // GPIO and interrupts
        GpioDir => "REG_GPIO_DIR",
        Gpio => "REG_GPIO",
        /// Extended GPIO direction (FT81x and later)
        GpioxDir => "REG_GPIOX_DIR",
        /// Extended GPIO (FT81x and later)
        Gpiox => "REG_GPIOX",
        IntFlags => "REG_INT_FLAGS",
        IntEn => "REG_INT_EN",
        IntMask => "REG_INT_MASK",

        // Sample playback
        /// Start address of the sample in RAM_G
        PlaybackStart => "REG_PLAYBACK_START",
        /// Sample length in bytes
        PlaybackLength => "REG_PLAYBACK_LENGTH",
        /// Current playback read pointer
        PlaybackReadPtr => "REG_PLAYBACK_READPTR",
        /// Sample rate in Hz
        PlaybackFreq => "REG_PLAYBACK_FREQ",
        /// Sample encoding
        PlaybackFormat => "REG_PLAYBACK_FORMAT",
        PlaybackLoop => "REG_PLAYBACK_LOOP",
        PlaybackPlay => "REG_PLAYBACK_PLAY",

        // Backlight
        /// Backlight PWM frequency
        PwmHz => "REG_PWM_HZ",
        /// Backlight PWM duty cycle
        PwmDuty => "REG_PWM_DUTY",
        Macro0 => "REG_MACRO_0",
        Macro1 => "REG_MACRO_1",

        // Coprocessor
        /// Coprocessor FIFO read pointer
        CmdRead => "REG_CMD_READ",
        /// Coprocessor FIFO write pointer
        CmdWrite => "REG_CMD_WRITE",
        /// Coprocessor display list write offset
        CmdDl => "REG_CMD_DL",

        // Touch engine
        TouchMode => "REG_TOUCH_MODE",
        TouchAdcMode => "REG_TOUCH_ADC_MODE",
        TouchCharge => "REG_TOUCH_CHARGE",
        TouchSettle => "REG_TOUCH_SETTLE",
        TouchOversample => "REG_TOUCH_OVERSAMPLE",
        /// Resistive touch pressure threshold
        TouchRzThresh => "REG_TOUCH_RZTHRESH",
        TouchRawXy => "REG_TOUCH_RAW_XY",
        TouchRz => "REG_TOUCH_RZ",
        /// Calibrated touch coordinates
        TouchScreenXy => "REG_TOUCH_SCREEN_XY",
        TouchTagXy => "REG_TOUCH_TAG_XY",
        /// Tag under the primary touch point
        TouchTag => "REG_TOUCH_TAG",
        /// Extended (multi-touch) tag registers start here
        TouchTag1Xy => "REG_TOUCH_TAG1_XY",
        TouchTag1 => "REG_TOUCH_TAG1",
        TouchTag2Xy => "REG_TOUCH_TAG2_XY",
        TouchTag2 => "REG_TOUCH_TAG2",
        TouchTag3Xy => "REG_TOUCH_TAG3_XY",
        TouchTag3 => "REG_TOUCH_TAG3",
        TouchTag4Xy => "REG_TOUCH_TAG4_XY",
        TouchTag4 => "REG_TOUCH_TAG4",
        /// Touch calibration matrix, coefficients A to F
        TouchTransformA => "REG_TOUCH_TRANSFORM_A",
        TouchTransformB => "REG_TOUCH_TRANSFORM_B",
        TouchTransformC => "REG_TOUCH_TRANSFORM_C",
        TouchTransformD => "REG_TOUCH_TRANSFORM_D",
        TouchTransformE => "REG_TOUCH_TRANSFORM_E",
        TouchTransformF => "REG_TOUCH_TRANSFORM_F",
        /// Touch controller selection and setup
        TouchConfig => "REG_TOUCH_CONFIG",
        /// Fourth capacitive touch point, X
        CtouchTouch4X => "REG_CTOUCH_TOUCH4_X",
        /// Host-driven touch acknowledge (BT81x)
        EhostTouchAck => "REG_EHOST_TOUCH_ACK",
        BistEn => "REG_BIST_EN",
        /// Internal clock trim
        Trim => "REG_TRIM",
        AnaComp => "REG_ANA_COMP",
        /// SPI bus width (single, dual, quad)
        SpiWidth => "REG_SPI_WIDTH",
        TouchDirectXy => "REG_TOUCH_DIRECT_XY",
        TouchDirectZ1Z2 => "REG_TOUCH_DIRECT_Z1Z2",
        /// ROM build stamp
        Datestamp => "REG_DATESTAMP",

        // Bulk command path
        /// Free space in the command FIFO
        CmdbSpace => "REG_CMDB_SPACE",
        /// Bulk command FIFO write port
        CmdbWrite => "REG_CMDB_WRITE",
        /// Frame rate throttling when the display list is idle
        AdaptiveFramerate => "REG_ADAPTIVE_FRAMERATE",
        /// Pause sample playback
        PlaybackPause => "REG_PLAYBACK_PAUSE",
        /// Flash interface state
        FlashStatus => "REG_FLASH_STATUS",

        // Widget trackers
        /// Tracker for the primary touch point
        Tracker => "REG_TRACKER",
        /// Trackers for the extended touch points
        Tracker1 => "REG_TRACKER_1" | "REG_TRACKER1",
        Tracker2 => "REG_TRACKER_2" | "REG_TRACKER2",
        Tracker3 => "REG_TRACKER_3" | "REG_TRACKER3",
        Tracker4 => "REG_TRACKER_4" | "REG_TRACKER4",

        // Media and animation
        /// Media FIFO read offset
        MediafifoRead => "REG_MEDIAFIFO_READ",
        /// Media FIFO write offset
        MediafifoWrite => "REG_MEDIAFIFO_WRITE",
        /// Video playback control
        PlayControl => "REG_PLAY_CONTROL",
        /// Running animation channels
        AnimActive => "REG_ANIM_ACTIVE",
        /// Coprocessor patch pointer, saved across coprocessor resets
        CoproPatchPtr => "REG_COPRO_PATCH_PTR",
    }
}

/// Whether a slot is a memory region or a register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlotKind {
    Memory,
    Register,
}

/// Any memory-region or register slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Slot {
    Memory(MemorySlot),
    Register(RegisterSlot),
}

impl Slot {
    /// Total number of slots across both kinds
    pub const COUNT: usize = MemorySlot::COUNT + RegisterSlot::COUNT;

    /// Every slot, memory regions first, ordered by [`Slot::index`]
    pub const ALL: [Slot; Slot::COUNT] = {
        let mut all = [Slot::Memory(MemorySlot::RamG); Slot::COUNT];
        let mut i = 0;
        while i < MemorySlot::COUNT {
            all[i] = Slot::Memory(MemorySlot::ALL[i]);
            i += 1;
        }
        let mut j = 0;
        while j < RegisterSlot::COUNT {
            all[MemorySlot::COUNT + j] = Slot::Register(RegisterSlot::ALL[j]);
            j += 1;
        }
        all
    };

    /// Dense index in `0..Slot::COUNT`
    pub const fn index(self) -> usize {
        match self {
            Slot::Memory(m) => m.index(),
            Slot::Register(r) => MemorySlot::COUNT + r.index(),
        }
    }

    /// Inverse of [`Slot::index`]
    pub const fn from_index(index: usize) -> Option<Slot> {
        if index < Slot::COUNT {
            Some(Slot::ALL[index])
        } else {
            None
        }
    }

    pub const fn kind(self) -> SlotKind {
        match self {
            Slot::Memory(_) => SlotKind::Memory,
            Slot::Register(_) => SlotKind::Register,
        }
    }

    /// Vendor symbol name
    pub const fn symbol(self) -> &'static str {
        match self {
            Slot::Memory(m) => m.symbol(),
            Slot::Register(r) => r.symbol(),
        }
    }

    /// Slot lives in the external flash window rather than host memory
    pub const fn is_flash(self) -> bool {
        matches!(self, Slot::Memory(MemorySlot::Flash | MemorySlot::FlashMax))
    }

    /// Same slot, comparable in `const` context
    pub const fn same(self, other: Slot) -> bool {
        self.index() == other.index()
    }
}

impl From<MemorySlot> for Slot {
    fn from(slot: MemorySlot) -> Self {
        Slot::Memory(slot)
    }
}

impl From<RegisterSlot> for Slot {
    fn from(slot: RegisterSlot) -> Self {
        Slot::Register(slot)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a symbol names no known slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownSlot;

impl fmt::Display for UnknownSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown memory region or register symbol")
    }
}

impl FromStr for Slot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(m) = MemorySlot::from_symbol(s) {
            return Ok(Slot::Memory(m));
        }
        RegisterSlot::from_symbol(s)
            .map(Slot::Register)
            .ok_or(UnknownSlot)
    }
}
