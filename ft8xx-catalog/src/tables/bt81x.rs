//! BT815/BT816/BT817/BT818 memory map and registers (BT81x datasheet, section 5)
//!
//! Same layout as FT81x plus the external flash window and a handful of
//! registers in previously reserved words.

use crate::catalog::{Catalog, CatalogEntry as E};
use crate::slot::{MemorySlot as M, RegisterSlot as R};
use crate::variant::Variant;

pub const BT81X: Catalog<'static> = Catalog::new(
    Variant::Bt81x,
    &[
        E::memory(M::RamG, 0x000000),
        E::memory(M::RamGEnd, 0x0FFFFF),
        E::memory(M::RomChipId, 0x0C0000),
        E::memory(M::RomFont, 0x1E0000),
        E::memory(M::RomFontAddr, 0x2FFFFC),
        E::memory(M::RamDl, 0x300000),
        E::memory(M::Reg, 0x302000),
        E::memory(M::RamCmd, 0x308000),
        E::memory(M::Flash, 0x800000),
        E::memory(M::FlashMax, 0x107FFFF),
        E::register(R::Id, 0x302000),
        E::register(R::Frames, 0x302004),
        E::register(R::Clock, 0x302008),
        E::register(R::Frequency, 0x30200C),
        E::register(R::RenderMode, 0x302010),
        E::register(R::SnapY, 0x302014),
        E::register(R::Snapshot, 0x302018),
        E::register(R::SnapFormat, 0x30201C),
        E::register(R::CpuReset, 0x302020),
        E::register(R::TapCrc, 0x302024),
        E::register(R::TapMask, 0x302028),
        E::register(R::HCycle, 0x30202C),
        E::register(R::HOffset, 0x302030),
        E::register(R::HSize, 0x302034),
        E::register(R::HSync0, 0x302038),
        E::register(R::HSync1, 0x30203C),
        E::register(R::VCycle, 0x302040),
        E::register(R::VOffset, 0x302044),
        E::register(R::VSize, 0x302048),
        E::register(R::VSync0, 0x30204C),
        E::register(R::VSync1, 0x302050),
        E::register(R::DlSwap, 0x302054),
        E::register(R::Rotate, 0x302058),
        E::register(R::OutBits, 0x30205C),
        E::register(R::Dither, 0x302060),
        E::register(R::Swizzle, 0x302064),
        E::register(R::CSpread, 0x302068),
        E::register(R::PclkPol, 0x30206C),
        E::register(R::Pclk, 0x302070),
        E::register(R::TagX, 0x302074),
        E::register(R::TagY, 0x302078),
        E::register(R::Tag, 0x30207C),
        E::register(R::VolPb, 0x302080),
        E::register(R::VolSound, 0x302084),
        E::register(R::Sound, 0x302088),
        E::register(R::Play, 0x30208C),
        E::register(R::GpioDir, 0x302090),
        E::register(R::Gpio, 0x302094),
        E::register(R::GpioxDir, 0x302098),
        E::register(R::Gpiox, 0x30209C),
        // 0x3020A0 - 0x3020A4 reserved
        E::register(R::IntFlags, 0x3020A8),
        E::register(R::IntEn, 0x3020AC),
        E::register(R::IntMask, 0x3020B0),
        E::register(R::PlaybackStart, 0x3020B4),
        E::register(R::PlaybackLength, 0x3020B8),
        E::register(R::PlaybackReadPtr, 0x3020BC),
        E::register(R::PlaybackFreq, 0x3020C0),
        E::register(R::PlaybackFormat, 0x3020C4),
        E::register(R::PlaybackLoop, 0x3020C8),
        E::register(R::PlaybackPlay, 0x3020CC),
        E::register(R::PwmHz, 0x3020D0),
        E::register(R::PwmDuty, 0x3020D4),
        E::register(R::Macro0, 0x3020D8),
        E::register(R::Macro1, 0x3020DC),
        // 0x3020E0 - 0x3020F4 reserved
        E::register(R::CmdRead, 0x3020F8),
        E::register(R::CmdWrite, 0x3020FC),
        E::register(R::CmdDl, 0x302100),
        E::register(R::TouchMode, 0x302104),
        E::register(R::TouchAdcMode, 0x302108),
        E::register(R::TouchCharge, 0x30210C),
        E::register(R::TouchSettle, 0x302110),
        E::register(R::TouchOversample, 0x302114),
        E::register(R::TouchRzThresh, 0x302118),
        E::register(R::TouchRawXy, 0x30211C),
        E::register(R::TouchRz, 0x302120),
        E::register(R::TouchScreenXy, 0x302124),
        E::register(R::TouchTagXy, 0x302128),
        E::register(R::TouchTag, 0x30212C),
        E::register(R::TouchTag1Xy, 0x302130),
        E::register(R::TouchTag1, 0x302134),
        E::register(R::TouchTag2Xy, 0x302138),
        E::register(R::TouchTag2, 0x30213C),
        E::register(R::TouchTag3Xy, 0x302140),
        E::register(R::TouchTag3, 0x302144),
        E::register(R::TouchTag4Xy, 0x302148),
        E::register(R::TouchTag4, 0x30214C),
        E::register(R::TouchTransformA, 0x302150),
        E::register(R::TouchTransformB, 0x302154),
        E::register(R::TouchTransformC, 0x302158),
        E::register(R::TouchTransformD, 0x30215C),
        E::register(R::TouchTransformE, 0x302160),
        E::register(R::TouchTransformF, 0x302164),
        E::register(R::TouchConfig, 0x302168),
        E::register(R::CtouchTouch4X, 0x30216C),
        E::register(R::EhostTouchAck, 0x302170),
        E::register(R::BistEn, 0x302174),
        // 0x302178 - 0x30217C reserved
        E::register(R::Trim, 0x302180),
        E::register(R::AnaComp, 0x302184),
        E::register(R::SpiWidth, 0x302188),
        E::register(R::TouchDirectXy, 0x30218C),
        E::register(R::TouchDirectZ1Z2, 0x302190),
        // 0x302194 - 0x302560 reserved
        E::register(R::Datestamp, 0x302564),
        E::register(R::CmdbSpace, 0x302574),
        E::register(R::CmdbWrite, 0x302578),
        E::register(R::AdaptiveFramerate, 0x30257C),
        E::register(R::PlaybackPause, 0x3025EC),
        E::register(R::FlashStatus, 0x3025F0),
        E::register(R::Tracker, 0x309000),
        E::register(R::Tracker1, 0x309004),
        E::register(R::Tracker2, 0x309008),
        E::register(R::Tracker3, 0x30900C),
        E::register(R::Tracker4, 0x309010),
        E::register(R::MediafifoRead, 0x309014),
        E::register(R::MediafifoWrite, 0x309018),
        E::register(R::AnimActive, 0x30902C),
        E::register(R::PlayControl, 0x30914E),
        E::register(R::CoproPatchPtr, 0x309162),
    ],
);
