use crate::catalog::{Catalog, EndpointDemo, NavItem};

pub fn catalog() -> Catalog {
    Catalog {
        nav: NavItem {
            path: "/tracking",
            label: "Tracking",
            desc: "AsNoTracking, IdentityResolution, Comparison",
        },
        title: "Query Tracking",
        subtitle: "Demonstrates default tracking, AsNoTracking, AsNoTrackingWithIdentityResolution, and performance comparison.",
        demos: vec![
            EndpointDemo::get(
                "Default Tracking",
                "/api/tracking/tracked",
                "EF Core tracks entities by default - the change tracker monitors property changes for SaveChanges",
                r#"// GET /api/tracking/tracked
var products = await _context.Products
    .Take(10)
    .ToListAsync();

// These entities are tracked by the DbContext.
var trackedCount = _context.ChangeTracker
    .Entries()
    .Count();

return Ok(new { trackedCount, products });"#,
            ),
            EndpointDemo::get(
                "AsNoTracking",
                "/api/tracking/notracking",
                "Skip change tracking for read-only queries - faster and uses less memory",
                r#"// GET /api/tracking/notracking
var products = await _context.Products
    .AsNoTracking()
    .Take(10)
    .ToListAsync();

// AsNoTracking() skips the change tracker.
// - Faster query materialization
// - Lower memory usage
// - Cannot call SaveChanges to persist edits

var trackedCount = _context.ChangeTracker
    .Entries()
    .Count(); // 0 - nothing is tracked"#,
            ),
            EndpointDemo::get(
                "AsNoTrackingWithIdentityResolution",
                "/api/tracking/identity-resolution",
                "No tracking but de-duplicates entities that appear multiple times in the result set",
                r#"// GET /api/tracking/identity-resolution
var orders = await _context.Orders
    .Include(o => o.Customer)
    .AsNoTrackingWithIdentityResolution()
    .Take(20)
    .ToListAsync();

// With identity resolution EF reuses the same Customer
// instance for every order that references it."#,
            ),
            EndpointDemo::get(
                "Performance Comparison",
                "/api/tracking/comparison",
                "Compare query execution time between tracked, no-tracking, and identity resolution modes",
                r#"// GET /api/tracking/comparison
var sw = Stopwatch.StartNew();

var tracked = await _context.Products.ToListAsync();
var trackedMs = sw.ElapsedMilliseconds;

_context.ChangeTracker.Clear();
sw.Restart();

var noTracking = await _context.Products
    .AsNoTracking()
    .ToListAsync();
var noTrackingMs = sw.ElapsedMilliseconds;

sw.Restart();

var identityRes = await _context.Products
    .AsNoTrackingWithIdentityResolution()
    .ToListAsync();
var identityResMs = sw.ElapsedMilliseconds;

return Ok(new { trackedMs, noTrackingMs, identityResMs });"#,
            ),
        ],
    }
}
