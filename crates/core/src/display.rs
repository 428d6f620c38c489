//! Display contract between the core and the host UI.
//!
//! The core never draws anything. It emits [`DisplayCommand`]s that a host applies
//! to its [`BoardView`], and it asks an injected [`AssetResolver`] for images. A
//! missing image is a valid display state ([`TileImage::Blank`]), never an error.

use crate::types::FaceId;

/// Source of tile images.
///
/// Implementations own their fallback chain; returning `None` means every
/// fallback failed and the tile is shown blank.
pub trait AssetResolver {
    type Image: Clone;

    fn resolve_face(&self, face: &FaceId) -> Option<Self::Image>;

    /// Shared image for face-down tiles
    fn back_image(&self) -> Option<Self::Image>;
}

/// What a tile shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileImage<I> {
    Front(I),
    Back(I),
    Blank,
}

impl<I> TileImage<I> {
    pub fn front(image: Option<I>) -> Self {
        image.map_or(TileImage::Blank, TileImage::Front)
    }

    pub fn back(image: Option<I>) -> Self {
        image.map_or(TileImage::Blank, TileImage::Back)
    }

    pub fn is_front(&self) -> bool {
        matches!(self, TileImage::Front(_))
    }

    pub fn is_back(&self) -> bool {
        matches!(self, TileImage::Back(_))
    }
}

/// Status line shown next to the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Preview: all tiles face-up
    Memorize,
    /// Board locked before play starts
    GetReady,
    FindPairs,
    Mismatch,
    Finished { errors: u32 },
}

/// A single UI update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCommand<I> {
    SetFace { tile: usize, image: TileImage<I> },
    SetTileEnabled { tile: usize, enabled: bool },
    SetScore(u32),
    SetErrors(u32),
    SetRestartEnabled(bool),
    SetStatus(Status),
}

/// Host-side widgets the commands are applied to
pub trait BoardView {
    type Image;

    fn set_face(&mut self, tile: usize, image: TileImage<Self::Image>);

    fn set_tile_enabled(&mut self, tile: usize, enabled: bool);

    fn set_score_text(&mut self, score: u32);

    fn set_error_text(&mut self, errors: u32);

    fn set_restart_enabled(&mut self, enabled: bool);

    fn set_status(&mut self, _status: Status) {}

    fn apply(&mut self, command: DisplayCommand<Self::Image>) {
        match command {
            DisplayCommand::SetFace { tile, image } => self.set_face(tile, image),
            DisplayCommand::SetTileEnabled { tile, enabled } => {
                self.set_tile_enabled(tile, enabled)
            }
            DisplayCommand::SetScore(score) => self.set_score_text(score),
            DisplayCommand::SetErrors(errors) => self.set_error_text(errors),
            DisplayCommand::SetRestartEnabled(enabled) => self.set_restart_enabled(enabled),
            DisplayCommand::SetStatus(status) => self.set_status(status),
        }
    }

    fn apply_all<C>(&mut self, commands: C)
    where
        C: IntoIterator<Item = DisplayCommand<Self::Image>>,
        Self: Sized,
    {
        for command in commands {
            self.apply(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        faces: Vec<(usize, TileImage<char>)>,
        score: u32,
        errors: u32,
        restart: bool,
        disabled: Vec<usize>,
    }

    impl BoardView for Recorder {
        type Image = char;

        fn set_face(&mut self, tile: usize, image: TileImage<char>) {
            self.faces.push((tile, image));
        }

        fn set_tile_enabled(&mut self, tile: usize, enabled: bool) {
            if !enabled {
                self.disabled.push(tile);
            }
        }

        fn set_score_text(&mut self, score: u32) {
            self.score = score;
        }

        fn set_error_text(&mut self, errors: u32) {
            self.errors = errors;
        }

        fn set_restart_enabled(&mut self, enabled: bool) {
            self.restart = enabled;
        }
    }

    #[test]
    fn missing_images_degrade_to_blank() {
        assert_eq!(TileImage::<char>::front(None), TileImage::Blank);
        assert_eq!(TileImage::back(Some('#')), TileImage::Back('#'));
        assert!(TileImage::front(Some('x')).is_front());
        assert!(!TileImage::<char>::Blank.is_back());
    }

    #[test]
    fn apply_routes_every_command() {
        let mut view = Recorder::default();
        view.apply_all([
            DisplayCommand::SetFace {
                tile: 2,
                image: TileImage::Front('A'),
            },
            DisplayCommand::SetTileEnabled {
                tile: 2,
                enabled: false,
            },
            DisplayCommand::SetScore(3),
            DisplayCommand::SetErrors(4),
            DisplayCommand::SetRestartEnabled(true),
            DisplayCommand::SetStatus(Status::FindPairs),
        ]);

        assert_eq!(view.faces, vec![(2, TileImage::Front('A'))]);
        assert_eq!(view.disabled, vec![2]);
        assert_eq!(view.score, 3);
        assert_eq!(view.errors, 4);
        assert!(view.restart);
    }
}
