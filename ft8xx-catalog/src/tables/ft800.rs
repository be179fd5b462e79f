//! FT800/FT801 memory map and registers (FT800 datasheet, section 5)

use crate::catalog::{Catalog, CatalogEntry as E};
use crate::slot::{MemorySlot as M, RegisterSlot as R};
use crate::variant::Variant;

pub const FT800: Catalog<'static> = Catalog::new(
    Variant::Ft800,
    &[
        E::memory(M::RamG, 0x000000),
        E::memory(M::RamGEnd, 0x03FFFF),
        E::memory(M::RomChipId, 0x0C0000),
        E::memory(M::RomFont, 0x0BB23C),
        E::memory(M::RomFontAddr, 0x0FFFFC),
        E::memory(M::RamDl, 0x100000),
        E::memory(M::RamPal, 0x102000),
        E::memory(M::Reg, 0x102400),
        E::memory(M::RamCmd, 0x108000),
        E::register(R::Id, 0x102400),
        E::register(R::Frames, 0x102404),
        E::register(R::Clock, 0x102408),
        E::register(R::Frequency, 0x10240C),
        E::register(R::RenderMode, 0x102410),
        E::register(R::SnapY, 0x102414),
        E::register(R::Snapshot, 0x102418),
        E::register(R::CpuReset, 0x10241C),
        E::register(R::TapCrc, 0x102420),
        E::register(R::TapMask, 0x102424),
        E::register(R::HCycle, 0x102428),
        E::register(R::HOffset, 0x10242C),
        E::register(R::HSize, 0x102430),
        E::register(R::HSync0, 0x102434),
        E::register(R::HSync1, 0x102438),
        E::register(R::VCycle, 0x10243C),
        E::register(R::VOffset, 0x102440),
        E::register(R::VSize, 0x102444),
        E::register(R::VSync0, 0x102448),
        E::register(R::VSync1, 0x10244C),
        E::register(R::DlSwap, 0x102450),
        E::register(R::Rotate, 0x102454),
        E::register(R::OutBits, 0x102458),
        E::register(R::Dither, 0x10245C),
        E::register(R::Swizzle, 0x102460),
        E::register(R::CSpread, 0x102464),
        E::register(R::PclkPol, 0x102468),
        E::register(R::Pclk, 0x10246C),
        E::register(R::TagX, 0x102470),
        E::register(R::TagY, 0x102474),
        E::register(R::Tag, 0x102478),
        E::register(R::VolPb, 0x10247C),
        E::register(R::VolSound, 0x102480),
        E::register(R::Sound, 0x102484),
        E::register(R::Play, 0x102488),
        E::register(R::GpioDir, 0x10248C),
        E::register(R::Gpio, 0x102490),
        // 0x102494 reserved
        E::register(R::IntFlags, 0x102498),
        E::register(R::IntEn, 0x10249C),
        E::register(R::IntMask, 0x1024A0),
        E::register(R::PlaybackStart, 0x1024A4),
        E::register(R::PlaybackLength, 0x1024A8),
        E::register(R::PlaybackReadPtr, 0x1024AC),
        E::register(R::PlaybackFreq, 0x1024B0),
        E::register(R::PlaybackFormat, 0x1024B4),
        E::register(R::PlaybackLoop, 0x1024B8),
        E::register(R::PlaybackPlay, 0x1024BC),
        E::register(R::PwmHz, 0x1024C0),
        E::register(R::PwmDuty, 0x1024C4),
        E::register(R::Macro0, 0x1024C8),
        E::register(R::Macro1, 0x1024CC),
        // 0x1024D0 - 0x1024E0 reserved
        E::register(R::CmdRead, 0x1024E4),
        E::register(R::CmdWrite, 0x1024E8),
        E::register(R::CmdDl, 0x1024EC),
        E::register(R::TouchMode, 0x1024F0),
        E::register(R::TouchAdcMode, 0x1024F4),
        E::register(R::TouchCharge, 0x1024F8),
        E::register(R::TouchSettle, 0x1024FC),
        E::register(R::TouchOversample, 0x102500),
        E::register(R::TouchRzThresh, 0x102504),
        E::register(R::TouchRawXy, 0x102508),
        E::register(R::TouchRz, 0x10250C),
        E::register(R::TouchScreenXy, 0x102510),
        E::register(R::TouchTagXy, 0x102514),
        E::register(R::TouchTag, 0x102518),
        E::register(R::TouchTransformA, 0x10251C),
        E::register(R::TouchTransformB, 0x102520),
        E::register(R::TouchTransformC, 0x102524),
        E::register(R::TouchTransformD, 0x102528),
        E::register(R::TouchTransformE, 0x10252C),
        E::register(R::TouchTransformF, 0x102530),
        // 0x102534 - 0x102570 reserved
        E::register(R::TouchDirectXy, 0x102574),
        E::register(R::TouchDirectZ1Z2, 0x102578),
        E::register(R::Tracker, 0x109000),
    ],
);
