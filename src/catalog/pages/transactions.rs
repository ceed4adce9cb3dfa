use crate::catalog::{Catalog, EndpointDemo, NavItem};

pub fn catalog() -> Catalog {
    Catalog {
        nav: NavItem {
            path: "/transactions",
            label: "Transactions",
            desc: "BeginTransaction, Savepoints, Rollback",
        },
        title: "Transactions",
        subtitle: "Demonstrates explicit transactions with BeginTransaction, Commit, Rollback, Savepoints, and multiple SaveChanges.",
        demos: vec![
            EndpointDemo::post(
                "Basic Transaction (Commit)",
                "/api/transactions/basic",
                "Wraps a price update in an explicit transaction - BeginTransactionAsync, SaveChangesAsync, then CommitAsync.",
                r#"using var transaction = await _context.Database.BeginTransactionAsync();
try
{
    var product = await _context.Products.FirstAsync();
    product.UnitPrice += 1;
    await _context.SaveChangesAsync();

    // Commit persists the change to the database
    await transaction.CommitAsync();
    return Ok(new { message = "Committed", product.ProductName, product.UnitPrice });
}
catch
{
    // Rollback undoes everything since BeginTransaction
    await transaction.RollbackAsync();
    throw;
}"#,
            ),
            EndpointDemo::post(
                "Transaction Rollback",
                "/api/transactions/rollback",
                "Modifies data and calls SaveChangesAsync, then explicitly rolls back - proving the database is unchanged.",
                r#"using var transaction = await _context.Database.BeginTransactionAsync();

var product = await _context.Products.FirstAsync();
var originalPrice = product.UnitPrice;

product.UnitPrice += 100;
await _context.SaveChangesAsync();

// Rollback undoes the SaveChanges
await transaction.RollbackAsync();

var verify = await _context.Products
    .AsNoTracking()
    .FirstAsync(p => p.ProductId == product.ProductId);

return Ok(new {
    originalPrice,
    priceAfterSaveChanges = product.UnitPrice,
    priceAfterRollback = verify.UnitPrice,
    rollbackSucceeded = verify.UnitPrice == originalPrice
});"#,
            ),
            EndpointDemo::post(
                "Savepoints",
                "/api/transactions/savepoint",
                "Creates a savepoint mid-transaction, then rolls back to it - partial undo within a single transaction.",
                r#"using var transaction = await _context.Database.BeginTransactionAsync();

_context.Products.Add(new Product { ProductName = "Savepoint Product A" });
await _context.SaveChangesAsync();

await transaction.CreateSavepointAsync("AfterFirstInsert");

_context.Products.Add(new Product { ProductName = "Savepoint Product B" });
await _context.SaveChangesAsync();

// Undoes Product B but keeps Product A
await transaction.RollbackToSavepointAsync("AfterFirstInsert");

await transaction.CommitAsync();"#,
            ),
            EndpointDemo::post(
                "Multiple SaveChanges in Transaction",
                "/api/transactions/multiple-savechanges",
                "Calls SaveChangesAsync twice within one transaction, then commits both as a single atomic unit.",
                r#"using var transaction = await _context.Database.BeginTransactionAsync();

var product = await _context.Products.FirstAsync();
product.UnitPrice += 5;
var firstSave = await _context.SaveChangesAsync();

var product2 = await _context.Products.Skip(1).FirstAsync();
product2.UnitsInStock += 10;
var secondSave = await _context.SaveChangesAsync();

// Single commit for both SaveChanges calls
await transaction.CommitAsync();

return Ok(new {
    message = "Both SaveChanges committed atomically",
    firstSaveAffectedRows = firstSave,
    secondSaveAffectedRows = secondSave
});"#,
            ),
        ],
    }
}
