use std::path::PathBuf;

use strum::Display;

use crate::{
    args::UploadRequest, layout::Layout, slug::slugify, species::Species, strip::strip_and_save,
};

/// Extension of the stripped copy. Only JPEG uploads stay JPEG.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputExtension {
    #[strum(serialize = ".jpg")]
    Jpg,
    #[strum(serialize = ".png")]
    Png,
}

impl OutputExtension {
    /// GIF, BMP, WebP and everything else that is not JPEG is converted to PNG.
    pub fn for_source(filename: &str) -> Self {
        let lowercase = filename.to_lowercase();
        if lowercase.ends_with(".jpg") || lowercase.ends_with(".jpeg") {
            OutputExtension::Jpg
        } else {
            OutputExtension::Png
        }
    }
}

/// Where a single upload is read from and where its stripped copy goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPlan {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub slug: String,
    pub extension: OutputExtension,
    pub species: Species,
}

impl UploadPlan {
    /// Two uploads that slugify the same way resolve to the same destination;
    /// whichever is written last wins.
    pub fn resolve(request: &UploadRequest, layout: &Layout) -> Self {
        let slug = slugify(&request.filename);
        let species = Species::classify(&request.species);
        let extension = OutputExtension::for_source(&request.filename);
        let destination = layout
            .species_dir(species)
            .join(format!("{slug}{extension}"));

        Self {
            source: layout.source_path(&request.filename),
            destination,
            slug,
            extension,
            species,
        }
    }

    /// Name of the output file, without the directory
    pub fn output_name(&self) -> String {
        format!("{}{}", self.slug, self.extension)
    }

    /// Strips and saves. Failures are printed by the stripper and reported as `false`.
    pub fn execute(&self) -> bool {
        log::debug!(
            "{} ({}) -> {}",
            self.source.display(),
            self.species,
            self.destination.display()
        );
        strip_and_save(&self.source, &self.destination)
    }
}

/// Processes one upload end to end and prints the outcome.
pub fn process_upload(request: &UploadRequest, layout: &Layout) -> bool {
    let plan = UploadPlan::resolve(request, layout);
    if plan.execute() {
        println!("✅ {} → {}", request.filename, plan.output_name());
        log::info!("wrote {}", plan.destination.display());
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn layout() -> Layout {
        Layout {
            upload_dir: PathBuf::from("/up"),
            breeds_dir: PathBuf::from("/site/breeds"),
        }
    }

    fn resolve(filename: &str, species: &str) -> UploadPlan {
        UploadPlan::resolve(&UploadRequest::new(filename, Some(species)), &layout())
    }

    #[test]
    fn jpg_to_cats() {
        let plan = resolve("My Dog.jpg", "cat");
        assert_eq!(plan.source, PathBuf::from("/up/My Dog.jpg"));
        assert_eq!(plan.destination, PathBuf::from("/site/breeds/cats/my-dog.jpg"));
        assert_eq!(plan.extension, OutputExtension::Jpg);
        assert_eq!(plan.species, Species::Cat);
    }

    #[test]
    fn png_to_dogs() {
        let plan = resolve("Photo_01.png", "dog");
        assert_eq!(plan.destination, PathBuf::from("/site/breeds/dogs/photo-01.png"));
        assert_eq!(plan.output_name(), "photo-01.png");
    }

    #[test]
    fn species_match_is_case_insensitive() {
        let plan = resolve("weird!!name.png", "CAT");
        assert_eq!(plan.slug, "weirdname");
        assert_eq!(plan.destination.parent(), Some(Path::new("/site/breeds/cats")));
    }

    #[test]
    fn other_formats_become_png() {
        assert_eq!(resolve("x.gif", "dog").destination, PathBuf::from("/site/breeds/dogs/x.png"));
        assert_eq!(resolve("x.BMP", "dog").extension, OutputExtension::Png);
        assert_eq!(resolve("noext", "dog").extension, OutputExtension::Png);
        assert_eq!(resolve("x.JPEG", "dog").extension, OutputExtension::Jpg);
        assert_eq!(resolve("x.jpeg", "dog").output_name(), "x.jpg");
    }

    #[test]
    fn unknown_species_is_a_dog() {
        let plan = resolve("x.png", "bird");
        assert_eq!(plan.species, Species::Dog);
        assert_eq!(plan.destination, PathBuf::from("/site/breeds/dogs/x.png"));
    }

    #[test]
    fn default_species_is_dog() {
        let plan = UploadPlan::resolve(&UploadRequest::new("x.png", None), &layout());
        assert_eq!(plan.species, Species::Dog);
    }

    #[test]
    fn colliding_slugs_share_a_destination() {
        assert_eq!(
            resolve("My Dog.png", "dog").destination,
            resolve("my_dog!.png", "dog").destination
        );
    }

    #[test]
    fn colliding_upload_overwrites_earlier_output() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout {
            upload_dir: dir.path().join("upload"),
            breeds_dir: dir.path().join("breeds"),
        };
        std::fs::create_dir_all(&layout.upload_dir).unwrap();
        std::fs::create_dir_all(layout.species_dir(Species::Dog)).unwrap();
        let first = image::RgbImage::from_pixel(4, 4, image::Rgb([255, 0, 0]));
        let second = image::RgbImage::from_pixel(4, 4, image::Rgb([0, 0, 255]));
        first.save(layout.upload_dir.join("My Dog.png")).unwrap();
        second.save(layout.upload_dir.join("my_dog!.png")).unwrap();

        assert!(process_upload(&UploadRequest::new("My Dog.png", None), &layout));
        assert!(process_upload(&UploadRequest::new("my_dog!.png", None), &layout));

        let written = layout.species_dir(Species::Dog).join("my-dog.png");
        assert_eq!(image::open(&written).unwrap().to_rgb8(), second);
    }

    #[test]
    fn process_upload_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout {
            upload_dir: dir.path().join("upload"),
            breeds_dir: dir.path().join("breeds"),
        };
        std::fs::create_dir_all(&layout.upload_dir).unwrap();
        std::fs::create_dir_all(layout.species_dir(Species::Cat)).unwrap();
        image::RgbImage::new(3, 2)
            .save(layout.upload_dir.join("Tabby Cat.gif"))
            .unwrap();

        let request = UploadRequest::new("Tabby Cat.gif", Some("Cat"));
        assert!(process_upload(&request, &layout));

        let written = layout.species_dir(Species::Cat).join("tabby-cat.png");
        let decoded = image::open(&written).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
    }

    #[test]
    fn process_upload_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout {
            upload_dir: dir.path().to_path_buf(),
            breeds_dir: dir.path().to_path_buf(),
        };
        std::fs::create_dir_all(layout.species_dir(Species::Dog)).unwrap();
        let request = UploadRequest::new("missing.png", None);
        assert!(!process_upload(&request, &layout));
        assert!(!layout.species_dir(Species::Dog).join("missing.png").exists());
    }
}
